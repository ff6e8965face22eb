use crate::simulation_system::config::SimulationConstants;

// Mutable state carried from one step to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub time: f64,
    pub port_radius: f64,
    pub fuel_consumed: f64,
    pub steps: u64,
}

impl SimulationState {
    pub fn new(constants: &SimulationConstants) -> Self {
        SimulationState {
            time: 0.0,
            port_radius: constants.initial_port_radius,
            fuel_consumed: 0.0,
            steps: 0,
        }
    }

    // Moves the clock forward one step. Time is derived from the step count so
    // that it never drifts from `steps * time_step`.
    pub fn advance(&mut self, time_step: f64) {
        self.steps += 1;
        self.time = self.steps as f64 * time_step;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub oxidizer_flux: f64,
    pub regression_rate: f64,
    pub fuel_flow_rate: f64,
    pub total_mass_flow_rate: f64,
    pub chamber_pressure: f64,
    pub thrust: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    DurationElapsed,
    MaxPortRadiusReached,
    Aborted,
}
