//! Data-quality defects injected into freshly generated records.

use cbs_model::{NullableField, PatientVisitRecord, Result, SynthError};
use rand::Rng;

use crate::rng::chance;

/// Default probability of blanking each nullable field.
pub const DEFAULT_NULL_RATE: f64 = 0.07;

/// Default probability of inflating a record's charge and payment.
pub const DEFAULT_OUTLIER_RATE: f64 = 0.02;

/// Charge multiplier applied to outlier records.
pub const OUTLIER_MULTIPLIER: u32 = 10;

/// Missing-value and outlier injection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorruptionPass {
    null_rate: f64,
    outlier_rate: f64,
}

impl Default for CorruptionPass {
    fn default() -> Self {
        Self {
            null_rate: DEFAULT_NULL_RATE,
            outlier_rate: DEFAULT_OUTLIER_RATE,
        }
    }
}

impl CorruptionPass {
    pub fn new(null_rate: f64, outlier_rate: f64) -> Result<Self> {
        Ok(Self {
            null_rate: validate_rate("null rate", null_rate)?,
            outlier_rate: validate_rate("outlier rate", outlier_rate)?,
        })
    }

    pub fn null_rate(&self) -> f64 {
        self.null_rate
    }

    pub fn outlier_rate(&self) -> f64 {
        self.outlier_rate
    }

    /// Blank nullable fields, then maybe inflate the amounts.
    ///
    /// Each nullable field is checked independently in [`NullableField::ALL`]
    /// order, one draw per field, followed by one draw for the outlier.
    pub fn apply<R: Rng>(&self, record: &mut PatientVisitRecord, rng: &mut R) -> Corruption {
        let mut corruption = Corruption::default();
        for field in NullableField::ALL {
            if chance(rng, self.null_rate) {
                field.clear(record);
                corruption.nulled.push(field);
            }
        }
        if chance(rng, self.outlier_rate) {
            inflate_amounts(record);
            corruption.outlier = true;
        }
        corruption
    }
}

/// What the corruption pass did to one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corruption {
    pub nulled: Vec<NullableField>,
    pub outlier: bool,
}

impl Corruption {
    pub fn is_clean(&self) -> bool {
        self.nulled.is_empty() && !self.outlier
    }
}

/// Multiply the charge and reset payment to 80% of the new charge, rounded down.
///
/// Overrides whatever payment the claim status produced.
pub fn inflate_amounts(record: &mut PatientVisitRecord) {
    record.charge_amount = record.charge_amount.saturating_mul(OUTLIER_MULTIPLIER);
    record.payment_amount = (u64::from(record.charge_amount) * 4 / 5) as u32;
}

fn validate_rate(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SynthError::InvalidRate { name, value })
    }
}
