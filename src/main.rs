use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use hybrid_rocket_simulation::*;
use log::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Internal ballistics of a hybrid rocket motor with a fixed oxidizer feed."
)]
struct Cli {
    #[arg(long, help = "JSON file overriding any subset of the reference motor constants")]
    config: Option<PathBuf>,

    #[arg(long, help = "Write the time, port radius, pressure and thrust series as CSV")]
    csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let constants = match &cli.config {
        Some(path) => {
            info!("Loading motor configuration from {}", path.display());
            SimulationConstants::from_json_file(path)?
        }
        None => SimulationConstants::default(),
    };

    let result = run(constants)?;
    Telemetry::display_summary(&result);

    if let Some(path) = &cli.csv {
        let writer = BufWriter::new(File::create(path)?);
        Telemetry::write_csv(&result.series, writer)?;
        info!("Wrote {} samples to {}", result.steps(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["hybrid_sim"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.csv.is_none());
    }

    #[test]
    fn test_parse_config_and_csv() {
        let cli = Cli::try_parse_from([
            "hybrid_sim",
            "--csv",
            "out.csv",
            "--config",
            "motor.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("motor.json")));
        assert_eq!(cli.csv, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_parse_rejects_unknown_and_missing_values() {
        assert!(Cli::try_parse_from(["hybrid_sim", "--plot"]).is_err());
        assert!(Cli::try_parse_from(["hybrid_sim", "--csv"]).is_err());
    }
}
