use crate::simulation_system::state::TerminationReason;

// Index-aligned time histories, one entry per completed step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSeries {
    pub time: Vec<f64>,
    pub port_radius: Vec<f64>,
    pub chamber_pressure: Vec<f64>,
    pub thrust: Vec<f64>,
}

impl OutputSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OutputSeries {
            time: Vec::with_capacity(capacity),
            port_radius: Vec::with_capacity(capacity),
            chamber_pressure: Vec::with_capacity(capacity),
            thrust: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: f64, port_radius: f64, chamber_pressure: f64, thrust: f64) {
        self.time.push(time);
        self.port_radius.push(port_radius);
        self.chamber_pressure.push(chamber_pressure);
        self.thrust.push(thrust);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn max_chamber_pressure(&self) -> Option<f64> {
        self.chamber_pressure.iter().copied().reduce(f64::max)
    }

    pub fn max_thrust(&self) -> Option<f64> {
        self.thrust.iter().copied().reduce(f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub series: OutputSeries,
    pub total_fuel_consumed: f64,
    pub final_port_radius: f64,
    pub final_chamber_pressure: f64,
    pub final_thrust: f64,
    // Simulated time when the loop stopped.
    pub elapsed_time: f64,
    pub termination: TerminationReason,
}

impl SimulationResult {
    pub fn steps(&self) -> usize {
        self.series.len()
    }
}
