//! Per-department generation parameters.

use crate::enums::Department;
use crate::error::{Result, SynthError};

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveRange {
    pub min: u32,
    pub max: u32,
}

impl InclusiveRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Sampling parameters for one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentProfile {
    pub age_range: InclusiveRange,
    pub diagnoses: &'static [&'static str],
    pub visit_reasons: &'static [&'static str],
    /// Charge bounds in USD.
    pub charge_range: InclusiveRange,
}

impl DepartmentProfile {
    /// Check the shape rules the generator relies on.
    pub fn validate(&self, department: Department) -> Result<()> {
        let invalid = |reason| SynthError::InvalidProfile { department, reason };
        if self.age_range.min > self.age_range.max {
            return Err(invalid("age range minimum exceeds maximum"));
        }
        if self.diagnoses.is_empty() {
            return Err(invalid("diagnosis list is empty"));
        }
        if self.visit_reasons.is_empty() {
            return Err(invalid("visit reason list is empty"));
        }
        if self.charge_range.min == 0 {
            return Err(invalid("charge range minimum must be positive"));
        }
        if self.charge_range.min > self.charge_range.max {
            return Err(invalid("charge range minimum exceeds maximum"));
        }
        Ok(())
    }
}

const CARDIOLOGY: DepartmentProfile = DepartmentProfile {
    age_range: InclusiveRange::new(35, 60),
    diagnoses: &["Hypertension", "Heart Failure", "Arrhythmia"],
    visit_reasons: &["Chest Pain", "Heart Screening", "Follow-up"],
    charge_range: InclusiveRange::new(150, 300),
};

const ONCOLOGY: DepartmentProfile = DepartmentProfile {
    age_range: InclusiveRange::new(13, 80),
    diagnoses: &["Cancer", "Leukemia", "Lymphoma", "Melanoma"],
    visit_reasons: &["Chemo", "Biopsy", "Follow-up", "Blood test"],
    charge_range: InclusiveRange::new(500, 1200),
};

const PEDIATRICS: DepartmentProfile = DepartmentProfile {
    age_range: InclusiveRange::new(1, 17),
    diagnoses: &["Flu", "Asthma", "Infection"],
    visit_reasons: &["Vaccination", "Checkup", "Fever"],
    charge_range: InclusiveRange::new(40, 80),
};

const NEUROLOGY: DepartmentProfile = DepartmentProfile {
    age_range: InclusiveRange::new(10, 70),
    diagnoses: &["Migraine", "Epilepsy", "Stroke"],
    visit_reasons: &["Seizure", "Numbness", "Headache"],
    charge_range: InclusiveRange::new(120, 200),
};

const ORTHOPEDICS: DepartmentProfile = DepartmentProfile {
    age_range: InclusiveRange::new(18, 70),
    diagnoses: &["Fracture", "Arthritis", "Back Pain"],
    visit_reasons: &["Injury", "Joint Pain", "Surgery Follow-up"],
    charge_range: InclusiveRange::new(120, 200),
};

impl Department {
    /// Look up the profile for this department.
    pub fn profile(&self) -> &'static DepartmentProfile {
        match self {
            Department::Cardiology => &CARDIOLOGY,
            Department::Oncology => &ONCOLOGY,
            Department::Pediatrics => &PEDIATRICS,
            Department::Neurology => &NEUROLOGY,
            Department::Orthopedics => &ORTHOPEDICS,
        }
    }
}

/// Validate every department profile. Called once before generation starts.
pub fn validate_profiles() -> Result<()> {
    for department in Department::ALL {
        department.profile().validate(department)?;
    }
    Ok(())
}
