use std::env;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::corruption::{apply_corruption, INVALID_EMAIL, MISSING_PHONE, UNKNOWN_TIER};
use crate::customer::{CustomerRecord, CSV_HEADERS};
use crate::error::GenError;

pub const DEFAULT_NUM_RECORDS: u64 = 10_000;
pub const DEFAULT_OUTPUT_PATH: &str = "src/main/resources/customers.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub num_records: u64,
    pub output_path: PathBuf,
    /// Fixed seed for reproducible output, `None` draws one from the OS
    pub seed: Option<u64>,
}

/// Yields `num_records` customers with ids `1..=num_records`, each one generated from `rng`
/// and then passed through the [corruption overlay](crate::corruption::apply_corruption).
#[derive(Debug)]
pub struct CustomerGenerator<R> {
    rng: R,
    next_id: u64,
    num_records: u64,
}

/// Counts of what was written, broken rows included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub records: u64,
    pub invalid_emails: u64,
    pub missing_phones: u64,
    pub unknown_tiers: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_records: DEFAULT_NUM_RECORDS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// # Errors
    /// Errors when `output_path` is relative and the current directory can't be read
    pub fn resolved_output_path(&self) -> io::Result<PathBuf> {
        if self.output_path.is_absolute() {
            Ok(self.output_path.clone())
        } else {
            Ok(env::current_dir()?.join(&self.output_path))
        }
    }
}

impl<R: Rng> CustomerGenerator<R> {
    #[must_use]
    pub fn new(rng: R, num_records: u64) -> Self {
        CustomerGenerator {
            rng,
            next_id: 1,
            num_records,
        }
    }
}

impl<R: Rng> Iterator for CustomerGenerator<R> {
    type Item = CustomerRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_id > self.num_records {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        Some(apply_corruption(CustomerRecord::generate(
            id,
            &mut self.rng,
        )))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.num_records - (self.next_id - 1)).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl GenerationSummary {
    fn tally(&mut self, record: &CustomerRecord) {
        self.records += 1;
        if record.email == INVALID_EMAIL {
            self.invalid_emails += 1;
        }
        if record.phone == MISSING_PHONE {
            self.missing_phones += 1;
        }
        if record.loyalty_tier == UNKNOWN_TIER {
            self.unknown_tiers += 1;
        }
    }
}

/// Writes the header row followed by one line per record.
///
/// The header is written up front rather than derived from the first record, so an empty
/// `records` still produces a valid one-line file.
///
/// # Errors
/// Errors when a record can't be serialized or the underlying writer fails
pub fn write_csv<W: io::Write>(
    records: impl IntoIterator<Item = CustomerRecord>,
    wtr: W,
) -> Result<GenerationSummary, GenError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(wtr);
    writer.write_record(CSV_HEADERS)?;

    let mut summary = GenerationSummary::default();
    for record in records {
        writer.serialize(&record)?;
        summary.tally(&record);
    }
    writer.flush()?;

    Ok(summary)
}

/// Generates `config.num_records` customers into `config.output_path`, creating missing parent
/// directories and truncating any existing file.
///
/// # Errors
/// Errors on any filesystem failure. A partially written file is left in place.
pub fn generate_file(config: &GeneratorConfig) -> Result<GenerationSummary, GenError> {
    create_parent_dir(&config.output_path)?;
    let file = File::create(&config.output_path)?;
    let records = CustomerGenerator::new(config.rng(), config.num_records);
    let summary = write_csv(records, file)?;

    info!(
        "Wrote {} records to {}: {} invalid emails, {} missing phones, {} unknown tiers",
        summary.records,
        config.output_path.display(),
        summary.invalid_emails,
        summary.missing_phones,
        summary.unknown_tiers
    );
    Ok(summary)
}

fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
