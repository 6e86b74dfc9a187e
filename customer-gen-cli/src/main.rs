use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error};

use customer_gen::generator::{
    generate_file, GeneratorConfig, DEFAULT_NUM_RECORDS, DEFAULT_OUTPUT_PATH,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of customer records to generate
    #[clap(short, long, default_value_t = DEFAULT_NUM_RECORDS)]
    pub(crate) num_records: u64,
    /// Where to write the CSV file, parent directories are created as needed
    #[clap(short, long, parse(from_os_str), default_value = DEFAULT_OUTPUT_PATH)]
    pub(crate) output: PathBuf,
    /// Seed for the random source, makes the output reproducible
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        GeneratorConfig {
            num_records: cli.num_records,
            output_path: cli.output,
            seed: cli.seed,
        }
    }
}

fn run(config: &GeneratorConfig, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(
        out,
        "Generating {} customer records to: {}",
        config.num_records,
        config.resolved_output_path()?.display()
    )?;
    generate_file(config)?;
    writeln!(out, "CSV generation complete.")?;

    Ok(())
}

fn main() {
    env_logger::init();

    let config = GeneratorConfig::from(Cli::parse());
    debug!("Running with {:?}", config);

    if let Err(e) = run(&config, &mut io::stdout()) {
        error!("Generation failed: {:?}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = GeneratorConfig::from(Cli::try_parse_from(["customer-gen"]).unwrap());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "customer-gen",
            "-n",
            "200",
            "--output",
            "out/customers.csv",
            "--seed",
            "42",
        ])
        .unwrap();
        let config = GeneratorConfig::from(cli);
        assert_eq!(config.num_records, 200);
        assert_eq!(config.output_path, PathBuf::from("out/customers.csv"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_cli_rejects_negative_count() {
        assert!(Cli::try_parse_from(["customer-gen", "-n", "-5"]).is_err());
    }

    #[test]
    fn test_run_prints_progress() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("out/customers.csv");
        let config = GeneratorConfig {
            num_records: 3,
            output_path: output_path.clone(),
            seed: Some(1),
        };
        let mut out = vec![];
        run(&config, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!(
                    "Generating 3 customer records to: {}",
                    output_path.display()
                )
                .as_str(),
                "CSV generation complete."
            ]
        );
        assert_eq!(
            std::fs::read_to_string(&output_path)
                .unwrap()
                .lines()
                .count(),
            4
        );
    }

    #[test]
    fn test_run_stops_before_completion_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = GeneratorConfig {
            num_records: 3,
            output_path: blocker.join("customers.csv"),
            seed: Some(1),
        };
        let mut out = vec![];
        assert!(run(&config, &mut out).is_err());

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.starts_with("Generating 3 customer records to: "));
        assert!(!printed.contains("CSV generation complete."));
    }
}
