pub mod series;
pub mod telemetry;
