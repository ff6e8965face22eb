pub mod ballistics;
