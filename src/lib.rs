pub mod ballistics_system;
pub mod constants;
pub mod errors;
pub mod simulation_system;
pub mod telemetry_system;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from simulation_system
pub use simulation_system::config::SimulationConstants;
pub use simulation_system::engine::{run, SimulationEngine};
pub use simulation_system::state::{SimulationState, StepResult, TerminationReason};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::series::{OutputSeries, SimulationResult};
pub use telemetry_system::telemetry::Telemetry;
