use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::SimulationError;

// Motor and integrator configuration for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConstants {
    pub regression_rate_coefficient: f64,
    pub oxidizer_flux_exponent: f64,
    pub fuel_density: f64,
    pub grain_length: f64,
    pub initial_port_radius: f64,
    pub max_port_radius: f64,
    pub oxidizer_mass_flow_rate: f64,
    pub characteristic_velocity: f64,
    pub throat_area: f64,
    pub time_step: f64,
    pub simulation_duration: f64,
    pub singularity_threshold: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            regression_rate_coefficient: REGRESSION_RATE_COEFFICIENT,
            oxidizer_flux_exponent: OXIDIZER_FLUX_EXPONENT,
            fuel_density: FUEL_DENSITY,
            grain_length: GRAIN_LENGTH,
            initial_port_radius: INITIAL_PORT_RADIUS,
            max_port_radius: MAX_PORT_RADIUS,
            oxidizer_mass_flow_rate: OXIDIZER_MASS_FLOW_RATE,
            characteristic_velocity: CHARACTERISTIC_VELOCITY,
            throat_area: THROAT_AREA,
            time_step: TIME_STEP,
            simulation_duration: SIMULATION_DURATION,
            singularity_threshold: SINGULARITY_THRESHOLD,
        }
    }
}

impl SimulationConstants {
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let constants: SimulationConstants = serde_json::from_str(json)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    // Rejects any configuration that would let the loop produce NaN or infinity.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let strictly_positive = [
            ("throat_area", self.throat_area),
            ("time_step", self.time_step),
            ("initial_port_radius", self.initial_port_radius),
            ("grain_length", self.grain_length),
            ("fuel_density", self.fuel_density),
            ("characteristic_velocity", self.characteristic_velocity),
            ("oxidizer_flux_exponent", self.oxidizer_flux_exponent),
        ];
        let non_negative = [
            ("regression_rate_coefficient", self.regression_rate_coefficient),
            ("oxidizer_mass_flow_rate", self.oxidizer_mass_flow_rate),
            ("singularity_threshold", self.singularity_threshold),
        ];
        let finite_only = [
            ("max_port_radius", self.max_port_radius),
            ("simulation_duration", self.simulation_duration),
        ];

        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Self::reject(name, value));
            }
        }
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Self::reject(name, value));
            }
        }
        for (name, value) in finite_only {
            if !value.is_finite() {
                return Err(Self::reject(name, value));
            }
        }

        Ok(())
    }

    pub fn max_steps(&self) -> u64 {
        if self.simulation_duration <= 0.0 {
            return 0;
        }
        (self.simulation_duration / self.time_step).ceil() as u64
    }

    fn reject(name: &'static str, value: f64) -> SimulationError {
        warn!("Rejecting simulation constant {} = {}", name, value);
        SimulationError::InvalidConstant { name, value }
    }
}
