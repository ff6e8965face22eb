use std::io::Write;

use crate::errors::SimulationError;
use crate::simulation_system::state::TerminationReason;
use crate::telemetry_system::series::{OutputSeries, SimulationResult};

pub const CSV_HEADER: &str = "time_s,port_radius_m,chamber_pressure_pa,thrust_n";

// Human-facing rendering of a finished run.
pub struct Telemetry;

impl Telemetry {
    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_pressure(pressure: f64) -> String {
        if pressure >= 1.0e6 {
            format!("{:.2} MPa", pressure / 1.0e6)
        } else if pressure >= 1.0e3 {
            format!("{:.2} kPa", pressure / 1.0e3)
        } else {
            format!("{:.2} Pa", pressure)
        }
    }

    fn format_force(force: f64) -> String {
        if force >= 1.0e3 {
            format!("{:.2} kN", force / 1.0e3)
        } else {
            format!("{:.2} N", force)
        }
    }

    fn describe_termination(reason: TerminationReason) -> &'static str {
        match reason {
            TerminationReason::DurationElapsed => "simulation duration elapsed",
            TerminationReason::MaxPortRadiusReached => "maximum port radius reached",
            TerminationReason::Aborted => "aborted",
        }
    }

    pub fn summary(result: &SimulationResult) -> String {
        let mut report = format!(
            "Simulation completed. Total fuel consumed: {:.2} kg\n\
             Final port radius: {:.3} m\n\
             Final chamber pressure: {:.2} Pa\n\
             Final thrust: {:.2} N\n",
            result.total_fuel_consumed,
            result.final_port_radius,
            result.final_chamber_pressure,
            result.final_thrust
        );

        report.push_str(&format!(
            "\n--- Run Summary ---\n\
             Steps: {}\n\
             Burn time: {}\n\
             Stopped: {}\n",
            result.steps(),
            Self::format_time(result.elapsed_time),
            Self::describe_termination(result.termination)
        ));

        if let (Some(peak_pressure), Some(peak_thrust)) =
            (result.series.max_chamber_pressure(), result.series.max_thrust())
        {
            report.push_str(&format!(
                "Peak chamber pressure: {}\n\
                 Peak thrust: {}\n",
                Self::format_pressure(peak_pressure),
                Self::format_force(peak_thrust)
            ));
        }

        report
    }

    pub fn display_summary(result: &SimulationResult) {
        println!("{}", Self::summary(result));
    }

    pub fn write_csv<W: Write>(
        series: &OutputSeries,
        mut writer: W,
    ) -> Result<(), SimulationError> {
        writeln!(writer, "{}", CSV_HEADER)?;
        for i in 0..series.len() {
            writeln!(
                writer,
                "{},{},{},{}",
                series.time[i], series.port_radius[i], series.chamber_pressure[i], series.thrust[i]
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
