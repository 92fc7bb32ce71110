//! Seeded generation of synthetic hospital visit and billing records.

pub mod assembler;
pub mod corruption;
pub mod generator;
pub mod payers;
pub mod rng;
pub mod stats;

pub use assembler::{DEFAULT_RECORD_COUNT, DEFAULT_SEED, Dataset, GenerationConfig, assemble};
pub use corruption::{
    Corruption, CorruptionPass, DEFAULT_NULL_RATE, DEFAULT_OUTLIER_RATE, OUTLIER_MULTIPLIER,
    inflate_amounts,
};
pub use generator::{RecordGenerator, insurance_id, payment_amount};
pub use payers::{MAX_PAYER_NAME_DRAWS, PAYER_POOL_SIZE, PayerPool};
pub use rng::{SynthRng, seeded_rng};
pub use stats::{DepartmentStats, GenerationStats};
