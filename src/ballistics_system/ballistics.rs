use std::f64::consts::PI;

use crate::simulation_system::config::SimulationConstants;

// Oxidizer mass flux through the port, in kg/(m²·s).
pub fn oxidizer_flux(port_radius: f64, constants: &SimulationConstants) -> f64 {
    constants.oxidizer_mass_flow_rate / (PI * port_radius.powi(2))
}

// Fuel surface regression rate in m/s, `a * G_ox^n`.
#[allow(clippy::if_same_then_else)]
pub fn regression_rate(
    port_radius: f64,
    oxidizer_flux: f64,
    constants: &SimulationConstants,
) -> f64 {
    if port_radius < constants.singularity_threshold {
        // Near-axis branch. The correction term for this region is not modeled,
        // so it still evaluates the plain regression law.
        constants.regression_rate_coefficient
            * oxidizer_flux.powf(constants.oxidizer_flux_exponent)
    } else {
        constants.regression_rate_coefficient
            * oxidizer_flux.powf(constants.oxidizer_flux_exponent)
    }
}

// Fuel mass flow rate in kg/s from the port's lateral burning surface.
pub fn fuel_flow_rate(
    port_radius: f64,
    regression_rate: f64,
    constants: &SimulationConstants,
) -> f64 {
    let surface_area = 2.0 * PI * port_radius * constants.grain_length;
    constants.fuel_density * surface_area * regression_rate
}

pub fn chamber_pressure(total_mass_flow_rate: f64, constants: &SimulationConstants) -> f64 {
    total_mass_flow_rate * constants.characteristic_velocity / constants.throat_area
}

// Ideal thrust in N, `m_dot * c*`. No pressure thrust or nozzle efficiency term.
pub fn thrust(total_mass_flow_rate: f64, constants: &SimulationConstants) -> f64 {
    total_mass_flow_rate * constants.characteristic_velocity
}
