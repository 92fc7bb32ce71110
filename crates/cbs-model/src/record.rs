//! The generated visit/billing row.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::enums::{ClaimStatus, Department, Gender, PayerType, VisitType, YesNo};

/// Insurance identifier carried by self-pay records.
pub const SELF_PAY_INSURANCE_ID: &str = "N/A";

/// Payer name carried by self-pay records.
pub const SELF_PAY_PAYER_NAME: &str = "Self-pay";

/// One simulated patient visit with its billing outcome.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientVisitRecord {
    pub patient_id: u32,
    pub physician_id: u32,
    pub appointment_id: String,
    pub gender: Gender,
    pub age: u32,
    pub department: Department,
    pub diagnosis: Option<&'static str>,
    pub visit_reason: Option<&'static str>,
    pub is_emergency: YesNo,
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub admission_date: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
    pub insurance_id: Option<String>,
    pub payer_name: Option<String>,
    pub payer_type: PayerType,
    pub claim_status: ClaimStatus,
    #[serde(rename = "charge_amount_USD")]
    pub charge_amount: u32,
    #[serde(rename = "payment_amount_USD")]
    pub payment_amount: u32,
}

impl PatientVisitRecord {
    /// Output column names, in order.
    pub const COLUMNS: [&'static str; 19] = [
        "patient_id",
        "physician_id",
        "appointment_id",
        "gender",
        "age",
        "department",
        "diagnosis",
        "visit_reason",
        "is_emergency",
        "visit_date",
        "visit_type",
        "admission_date",
        "discharge_date",
        "insurance_id",
        "payer_name",
        "payer_type",
        "claim_status",
        "charge_amount_USD",
        "payment_amount_USD",
    ];

    /// Days between admission and discharge, for inpatient visits.
    pub fn length_of_stay(&self) -> Option<i64> {
        match (self.admission_date, self.discharge_date) {
            (Some(admission), Some(discharge)) => Some((discharge - admission).num_days()),
            _ => None,
        }
    }

    pub fn is_inpatient(&self) -> bool {
        matches!(self.visit_type, VisitType::Inpatient)
    }
}

/// Appointment identifier for a zero-based sequence index.
pub fn appointment_id(index: usize) -> String {
    format!("A{index:05}")
}

/// Fields the corruption pass may blank out, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NullableField {
    Diagnosis,
    VisitReason,
    PayerName,
    InsuranceId,
}

impl NullableField {
    pub const ALL: [NullableField; 4] = [
        NullableField::Diagnosis,
        NullableField::VisitReason,
        NullableField::PayerName,
        NullableField::InsuranceId,
    ];

    /// Column name of the field.
    pub fn column(&self) -> &'static str {
        match self {
            NullableField::Diagnosis => "diagnosis",
            NullableField::VisitReason => "visit_reason",
            NullableField::PayerName => "payer_name",
            NullableField::InsuranceId => "insurance_id",
        }
    }

    pub fn clear(&self, record: &mut PatientVisitRecord) {
        match self {
            NullableField::Diagnosis => record.diagnosis = None,
            NullableField::VisitReason => record.visit_reason = None,
            NullableField::PayerName => record.payer_name = None,
            NullableField::InsuranceId => record.insurance_id = None,
        }
    }

    pub fn is_null(&self, record: &PatientVisitRecord) -> bool {
        match self {
            NullableField::Diagnosis => record.diagnosis.is_none(),
            NullableField::VisitReason => record.visit_reason.is_none(),
            NullableField::PayerName => record.payer_name.is_none(),
            NullableField::InsuranceId => record.insurance_id.is_none(),
        }
    }
}

impl fmt::Display for NullableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
