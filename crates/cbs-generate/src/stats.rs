//! Counters collected while a dataset is assembled.

use std::collections::BTreeMap;

use cbs_model::{ClaimStatus, Department, NullableField, PatientVisitRecord};

use crate::corruption::Corruption;

/// Per-department counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentStats {
    pub records: usize,
    pub inpatient: usize,
    pub emergency: usize,
    pub outliers: usize,
}

/// Totals over every record in a dataset, after corruption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub records: usize,
    pub by_department: BTreeMap<Department, DepartmentStats>,
    pub by_claim_status: BTreeMap<ClaimStatus, usize>,
    pub nulls: BTreeMap<NullableField, usize>,
    pub outliers: usize,
}

impl GenerationStats {
    pub fn observe(&mut self, record: &PatientVisitRecord, corruption: &Corruption) {
        self.records += 1;
        let department = self.by_department.entry(record.department).or_default();
        department.records += 1;
        if record.is_inpatient() {
            department.inpatient += 1;
        }
        if record.is_emergency.is_yes() {
            department.emergency += 1;
        }
        if corruption.outlier {
            department.outliers += 1;
            self.outliers += 1;
        }
        *self.by_claim_status.entry(record.claim_status).or_default() += 1;
        for field in &corruption.nulled {
            *self.nulls.entry(*field).or_default() += 1;
        }
    }

    pub fn null_count(&self, field: NullableField) -> usize {
        self.nulls.get(&field).copied().unwrap_or(0)
    }

    /// Fraction of records with `field` blanked.
    pub fn null_rate(&self, field: NullableField) -> f64 {
        ratio(self.null_count(field), self.records)
    }

    pub fn outlier_rate(&self) -> f64 {
        ratio(self.outliers, self.records)
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
