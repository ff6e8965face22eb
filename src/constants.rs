// Regression Law (r_dot = a * G_ox^n)
pub const REGRESSION_RATE_COEFFICIENT: f64 = 0.005;
pub const OXIDIZER_FLUX_EXPONENT: f64 = 0.8;

// Fuel Grain
pub const FUEL_DENSITY: f64 = 970.0; // kg/m³
pub const GRAIN_LENGTH: f64 = 1.0; // m
pub const INITIAL_PORT_RADIUS: f64 = 0.02; // m
pub const MAX_PORT_RADIUS: f64 = 0.5; // m

// Propellant Feed and Nozzle
pub const OXIDIZER_MASS_FLOW_RATE: f64 = 0.5; // kg/s
pub const CHARACTERISTIC_VELOCITY: f64 = 1500.0; // m/s (c*)
pub const THROAT_AREA: f64 = 0.01; // m²

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const SIMULATION_DURATION: f64 = 10.0; // s
pub const SINGULARITY_THRESHOLD: f64 = 0.01; // m
