//! Pool of payer display names shared by every record in a run.

use std::collections::BTreeSet;

use cbs_model::{Result, SynthError};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use rand::Rng;
use tracing::debug;

use crate::rng::pick;

/// Number of distinct payer names in a run.
pub const PAYER_POOL_SIZE: usize = 25;

/// Name draws allowed before giving up on a full pool.
pub const MAX_PAYER_NAME_DRAWS: usize = 300;

/// Distinct payer names in first-drawn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerPool {
    names: Vec<String>,
}

impl PayerPool {
    /// Build the run's pool from company-style fake names.
    pub fn initialize<R: Rng>(rng: &mut R) -> Result<Self> {
        Self::from_source(rng, PAYER_POOL_SIZE, MAX_PAYER_NAME_DRAWS, |rng| {
            CompanyName().fake_with_rng::<String, _>(rng)
        })
    }

    /// Draw names from `next_name` until `required` distinct names exist.
    ///
    /// Duplicates are skipped. Fails with [`SynthError::PayerPoolExhausted`]
    /// once `max_attempts` draws have been made without filling the pool.
    pub fn from_source<R, F>(
        rng: &mut R,
        required: usize,
        max_attempts: usize,
        mut next_name: F,
    ) -> Result<Self>
    where
        R: Rng,
        F: FnMut(&mut R) -> String,
    {
        let mut names = Vec::with_capacity(required);
        let mut seen = BTreeSet::new();
        let mut attempts = 0usize;
        while names.len() < required && attempts < max_attempts {
            attempts += 1;
            let name = next_name(rng);
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
        if names.len() < required {
            return Err(SynthError::PayerPoolExhausted {
                unique: names.len(),
                required,
                attempts,
            });
        }
        debug!(
            unique = names.len(),
            attempts,
            duplicates = attempts - names.len(),
            "payer pool built"
        );
        Ok(Self { names })
    }

    /// Build a pool from a fixed list, dropping repeated names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut unique = Vec::new();
        let mut attempts = 0usize;
        for name in names {
            attempts += 1;
            let name: String = name.into();
            if seen.insert(name.clone()) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            return Err(SynthError::PayerPoolExhausted {
                unique: 0,
                required: 1,
                attempts,
            });
        }
        Ok(Self { names: unique })
    }

    /// Uniformly pick a payer name.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        pick(&self.names, rng).as_str()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
