//! Times generating and serializing a large batch of customers without touching the disk.
//! can be run with `cargo run --release --example benchmark`

use std::error::Error;
use std::io;
use std::time::Instant;

use log::warn;

use customer_gen::generator::{write_csv, CustomerGenerator, GeneratorConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = GeneratorConfig {
        num_records: 1_000_000,
        seed: Some(0),
        ..GeneratorConfig::default()
    };
    let start = Instant::now();
    let summary = write_csv(
        CustomerGenerator::new(config.rng(), config.num_records),
        io::sink(),
    )?;
    warn!(
        "Generating {} records took: {:.2?}",
        summary.records,
        start.elapsed()
    );

    Ok(())
}
