//! Drives generation and corruption over a whole dataset.

use std::time::Instant;

use cbs_model::{PatientVisitRecord, Result, validate_profiles};
use chrono::{Local, NaiveDate};
use tracing::{info, info_span, trace};

use crate::corruption::{CorruptionPass, DEFAULT_NULL_RATE, DEFAULT_OUTLIER_RATE};
use crate::generator::RecordGenerator;
use crate::payers::PayerPool;
use crate::rng::seeded_rng;
use crate::stats::GenerationStats;

pub const DEFAULT_SEED: u64 = 123;
pub const DEFAULT_RECORD_COUNT: usize = 6000;

/// Settings for one dataset run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub seed: u64,
    pub record_count: usize,
    /// Last day of the visit-date window.
    pub reference_date: NaiveDate,
    pub null_rate: f64,
    pub outlier_rate: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl GenerationConfig {
    /// Default settings with a fixed reference date.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            seed: DEFAULT_SEED,
            record_count: DEFAULT_RECORD_COUNT,
            reference_date,
            null_rate: DEFAULT_NULL_RATE,
            outlier_rate: DEFAULT_OUTLIER_RATE,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    #[must_use]
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    #[must_use]
    pub fn with_null_rate(mut self, null_rate: f64) -> Self {
        self.null_rate = null_rate;
        self
    }

    #[must_use]
    pub fn with_outlier_rate(mut self, outlier_rate: f64) -> Self {
        self.outlier_rate = outlier_rate;
        self
    }

    /// Corruption settings, validated.
    pub fn corruption_pass(&self) -> Result<CorruptionPass> {
        CorruptionPass::new(self.null_rate, self.outlier_rate)
    }
}

/// Records in generation order plus counters over them.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<PatientVisitRecord>,
    pub stats: GenerationStats,
    pub payers: PayerPool,
}

/// Generate `config.record_count` corrupted records from a single seeded stream.
///
/// The payer pool is drawn from the same stream before the first record.
pub fn assemble(config: &GenerationConfig) -> Result<Dataset> {
    validate_profiles()?;
    let corruption = config.corruption_pass()?;

    let span = info_span!(
        "generate",
        seed = config.seed,
        records = config.record_count,
        reference_date = %config.reference_date
    );
    let _guard = span.enter();
    let start = Instant::now();

    let mut rng = seeded_rng(config.seed);
    let payers = PayerPool::initialize(&mut rng)?;
    let generator = RecordGenerator::new(&payers, config.reference_date)?;

    let mut records = Vec::with_capacity(config.record_count);
    let mut stats = GenerationStats::default();
    for index in 0..config.record_count {
        let mut record = generator.generate(index, &mut rng)?;
        let applied = corruption.apply(&mut record, &mut rng);
        trace!(
            index,
            department = %record.department,
            nulled = applied.nulled.len(),
            outlier = applied.outlier,
            "record generated"
        );
        stats.observe(&record, &applied);
        records.push(record);
    }

    info!(
        record_count = records.len(),
        payer_pool_size = payers.len(),
        outliers = stats.outliers,
        duration_ms = start.elapsed().as_millis(),
        "generation complete"
    );
    Ok(Dataset {
        records,
        stats,
        payers,
    })
}
