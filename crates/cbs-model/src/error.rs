//! Error types for profile validation and record generation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::enums::Department;

/// Errors that abort dataset generation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// A hardcoded department profile breaks one of its shape rules.
    #[error("invalid profile for {department}: {reason}")]
    InvalidProfile {
        department: Department,
        reason: &'static str,
    },

    /// A charge draw produced a non-positive amount.
    #[error("invalid charge amount {amount} for {department}")]
    NonPositiveCharge { department: Department, amount: u32 },

    /// The payer name source could not produce enough distinct names.
    #[error("payer pool has {unique} unique names after {attempts} draws, {required} required")]
    PayerPoolExhausted {
        unique: usize,
        required: usize,
        attempts: usize,
    },

    /// A probability setting falls outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    /// The visit-date window cannot be computed from the reference date.
    #[error("reference date {0} is out of range")]
    InvalidReferenceDate(NaiveDate),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, SynthError>;
