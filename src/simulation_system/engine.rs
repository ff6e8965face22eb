use log::{debug, info, trace};

use crate::ballistics_system::ballistics;
use crate::errors::SimulationError;
use crate::simulation_system::config::SimulationConstants;
use crate::simulation_system::state::{SimulationState, StepResult, TerminationReason};
use crate::telemetry_system::series::{OutputSeries, SimulationResult};

// Long runs grow the series past this on demand.
const PREALLOCATED_STEPS: u64 = 1 << 16;

// Fixed-step forward-Euler integrator for the port radius.
pub struct SimulationEngine {
    constants: SimulationConstants,
    state: SimulationState,
    series: OutputSeries,
    last_step: Option<StepResult>,
    max_steps: u64,
}

impl SimulationEngine {
    pub fn new(constants: SimulationConstants) -> Result<Self, SimulationError> {
        constants.validate()?;
        debug!("Initializing hybrid motor simulation with {:?}", constants);

        let max_steps = constants.max_steps();
        let state = SimulationState::new(&constants);
        let capacity = usize::try_from(max_steps.min(PREALLOCATED_STEPS)).unwrap_or(0);
        let series = OutputSeries::with_capacity(capacity);

        Ok(SimulationEngine {
            constants,
            state,
            series,
            last_step: None,
            max_steps,
        })
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn series(&self) -> &OutputSeries {
        &self.series
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        let out_of_time = self.state.steps >= self.max_steps
            || self.state.time >= self.constants.simulation_duration;

        if out_of_time {
            Some(TerminationReason::DurationElapsed)
        } else if self.state.port_radius >= self.constants.max_port_radius {
            Some(TerminationReason::MaxPortRadiusReached)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.termination_reason().is_some()
    }

    // Advances the motor by one time step, or returns `None` once a stop
    // condition holds.
    pub fn step(&mut self) -> Option<StepResult> {
        if self.is_finished() {
            return None;
        }

        let constants = &self.constants;
        let dt = constants.time_step;

        // Flux and regression use the radius at the start of the step.
        let oxidizer_flux = ballistics::oxidizer_flux(self.state.port_radius, constants);
        let regression_rate =
            ballistics::regression_rate(self.state.port_radius, oxidizer_flux, constants);

        self.state.port_radius += regression_rate * dt;

        // Everything downstream sees the updated radius.
        let fuel_flow_rate =
            ballistics::fuel_flow_rate(self.state.port_radius, regression_rate, constants);
        let total_mass_flow_rate = constants.oxidizer_mass_flow_rate + fuel_flow_rate;
        let chamber_pressure = ballistics::chamber_pressure(total_mass_flow_rate, constants);
        let thrust = ballistics::thrust(total_mass_flow_rate, constants);

        self.state.fuel_consumed += fuel_flow_rate * dt;
        self.series.push(
            self.state.time,
            self.state.port_radius,
            chamber_pressure,
            thrust,
        );

        trace!(
            "t={:.4}s r={:.5}m r_dot={:.5}m/s m_dot={:.4}kg/s Pc={:.1}Pa F={:.2}N",
            self.state.time,
            self.state.port_radius,
            regression_rate,
            total_mass_flow_rate,
            chamber_pressure,
            thrust
        );

        self.state.advance(dt);

        let result = StepResult {
            oxidizer_flux,
            regression_rate,
            fuel_flow_rate,
            total_mass_flow_rate,
            chamber_pressure,
            thrust,
        };
        self.last_step = Some(result);
        Some(result)
    }

    pub fn run(self) -> SimulationResult {
        self.run_until(|_| false)
    }

    // Extra stop predicate, checked before every step after the built-in ones.
    pub fn run_until<F>(mut self, mut abort: F) -> SimulationResult
    where
        F: FnMut(&SimulationState) -> bool,
    {
        let termination = loop {
            if let Some(reason) = self.termination_reason() {
                break reason;
            }
            if abort(&self.state) {
                break TerminationReason::Aborted;
            }
            self.step();
        };

        info!(
            "Simulation stopped ({:?}) after {} steps at t={:.3}s",
            termination, self.state.steps, self.state.time
        );
        self.finish(termination)
    }

    pub fn finish(self, termination: TerminationReason) -> SimulationResult {
        let (final_chamber_pressure, final_thrust) = self
            .last_step
            .map_or((0.0, 0.0), |step| (step.chamber_pressure, step.thrust));

        SimulationResult {
            series: self.series,
            total_fuel_consumed: self.state.fuel_consumed,
            final_port_radius: self.state.port_radius,
            final_chamber_pressure,
            final_thrust,
            elapsed_time: self.state.time,
            termination,
        }
    }
}

pub fn run(constants: SimulationConstants) -> Result<SimulationResult, SimulationError> {
    Ok(SimulationEngine::new(constants)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_step_reference_motor() {
        let mut engine = SimulationEngine::new(SimulationConstants::default()).unwrap();
        let step = engine.step().expect("First step should run");

        assert_abs_diff_eq!(step.oxidizer_flux, 397.887, epsilon = 1e-3);
        assert_abs_diff_eq!(step.regression_rate, 0.60087, epsilon = 1e-5);
        assert_abs_diff_eq!(engine.state().port_radius, 0.0260087, epsilon = 1e-7);
        assert_abs_diff_eq!(engine.series().time[0], 0.0);
        assert_abs_diff_eq!(engine.state().time, 0.01, epsilon = 1e-15);
        assert!(step.thrust > 0.0);
        assert!(step.chamber_pressure > 0.0);
    }

    #[test]
    fn test_fuel_flow_uses_updated_radius() {
        let constants = SimulationConstants::default();
        let mut engine = SimulationEngine::new(constants.clone()).unwrap();
        let step = engine.step().unwrap();

        let updated = engine.state().port_radius;
        let expected = ballistics::fuel_flow_rate(updated, step.regression_rate, &constants);
        assert_abs_diff_eq!(step.fuel_flow_rate, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            step.total_mass_flow_rate,
            constants.oxidizer_mass_flow_rate + expected,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            engine.state().fuel_consumed,
            expected * constants.time_step,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_step_after_finish_returns_none() {
        let constants = SimulationConstants {
            simulation_duration: 0.02,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(constants).unwrap();
        assert!(engine.step().is_some());
        assert!(engine.step().is_some());
        assert!(engine.is_finished());
        assert!(engine.step().is_none());
        assert_eq!(engine.series().len(), 2);
    }

    #[test]
    fn test_stops_at_max_port_radius() {
        let constants = SimulationConstants {
            max_port_radius: 0.05,
            ..Default::default()
        };
        let result = run(constants).unwrap();
        assert_eq!(result.termination, TerminationReason::MaxPortRadiusReached);
        assert!(result.final_port_radius >= 0.05);
        let last = result.series.port_radius.len() - 1;
        assert!(result.series.port_radius[last - 1] < 0.05);
    }

    #[test]
    fn test_degenerate_configuration_runs_zero_steps() {
        let constants = SimulationConstants {
            max_port_radius: 0.02,
            ..Default::default()
        };
        let result = run(constants).unwrap();
        assert!(result.series.is_empty());
        assert_eq!(result.final_port_radius, 0.02);
        assert_eq!(result.total_fuel_consumed, 0.0);
        assert_eq!(result.final_chamber_pressure, 0.0);
        assert_eq!(result.final_thrust, 0.0);
        assert_eq!(result.termination, TerminationReason::MaxPortRadiusReached);
    }

    #[test]
    fn test_negative_duration_runs_zero_steps() {
        let constants = SimulationConstants {
            simulation_duration: -1.0,
            ..Default::default()
        };
        let result = run(constants).unwrap();
        assert!(result.series.is_empty());
        assert_eq!(result.termination, TerminationReason::DurationElapsed);
    }

    #[test]
    fn test_invalid_constants_are_rejected_before_running() {
        let constants = SimulationConstants {
            throat_area: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SimulationEngine::new(constants),
            Err(SimulationError::InvalidConstant { name: "throat_area", .. })
        ));
    }

    #[test]
    fn test_run_until_aborts_on_predicate() {
        let engine = SimulationEngine::new(SimulationConstants::default()).unwrap();
        let result = engine.run_until(|state| state.port_radius > 0.1);
        assert_eq!(result.termination, TerminationReason::Aborted);
        let n = result.series.len();
        assert!(result.series.port_radius[n - 1] > 0.1);
        assert!(result.series.port_radius[n - 2] <= 0.1);
    }

    #[test]
    fn test_zero_oxidizer_flow_burns_no_fuel() {
        let constants = SimulationConstants {
            oxidizer_mass_flow_rate: 0.0,
            simulation_duration: 0.1,
            ..Default::default()
        };
        let result = run(constants).unwrap();
        assert_eq!(result.series.len(), 10);
        assert_eq!(result.total_fuel_consumed, 0.0);
        assert_eq!(result.final_port_radius, 0.02);
        assert_eq!(result.final_thrust, 0.0);
    }
}
