//! Shared invariant checks for generated records.

#![allow(dead_code)]

use cbs_model::{ClaimStatus, PatientVisitRecord, PayerType, VisitType};
use chrono::NaiveDate;

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

pub fn is_insurance_id(value: &str) -> bool {
    value.len() == 10
        && value.starts_with("INS-")
        && value[4..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Whether the record's charge was inflated by the outlier step.
pub fn is_outlier(record: &PatientVisitRecord) -> bool {
    record.charge_amount > record.department.profile().charge_range.max
}

/// Assert every cross-field rule that holds after corruption.
pub fn assert_consistent(record: &PatientVisitRecord, window: (NaiveDate, NaiveDate)) {
    let profile = record.department.profile();
    let id = &record.appointment_id;

    assert!(profile.age_range.contains(record.age), "{id}: age {}", record.age);
    if let Some(diagnosis) = record.diagnosis {
        assert!(profile.diagnoses.contains(&diagnosis), "{id}: {diagnosis}");
    }
    if let Some(reason) = record.visit_reason {
        assert!(profile.visit_reasons.contains(&reason), "{id}: {reason}");
    }
    assert!((110_000..=220_000).contains(&record.patient_id), "{id}");
    assert!((10_000..=99_999).contains(&record.physician_id), "{id}");

    assert!(record.charge_amount > 0, "{id}");
    if is_outlier(record) {
        assert_eq!(record.charge_amount % 10, 0, "{id}");
        assert!(profile.charge_range.contains(record.charge_amount / 10), "{id}");
        assert_eq!(
            u64::from(record.payment_amount),
            u64::from(record.charge_amount) * 4 / 5,
            "{id}"
        );
    } else {
        assert!(profile.charge_range.contains(record.charge_amount), "{id}");
        assert!(record.payment_amount <= record.charge_amount, "{id}");
        if record.claim_status != ClaimStatus::Paid {
            assert_eq!(record.payment_amount, 0, "{id}");
        }
        if record.payer_type == PayerType::SelfPay {
            assert_eq!(record.payment_amount, record.charge_amount, "{id}");
        }
    }

    if record.payer_type == PayerType::SelfPay {
        assert_eq!(record.claim_status, ClaimStatus::Paid, "{id}");
        assert!(
            matches!(record.insurance_id.as_deref(), None | Some("N/A")),
            "{id}"
        );
        assert!(
            matches!(record.payer_name.as_deref(), None | Some("Self-pay")),
            "{id}"
        );
    } else {
        assert_ne!(record.claim_status, ClaimStatus::Paid, "{id}");
        if let Some(insurance_id) = record.insurance_id.as_deref() {
            assert!(is_insurance_id(insurance_id), "{id}: {insurance_id}");
        }
        assert_ne!(record.payer_name.as_deref(), Some("Self-pay"), "{id}");
    }

    assert!(record.visit_date >= window.0 && record.visit_date <= window.1, "{id}");
    assert_eq!(
        record.admission_date.is_some(),
        record.discharge_date.is_some(),
        "{id}"
    );
    match record.visit_type {
        VisitType::Inpatient => {
            assert_eq!(record.admission_date, Some(record.visit_date), "{id}");
            let stay = record.length_of_stay().expect("inpatient stay");
            assert!((1..=29).contains(&stay), "{id}: stay {stay}");
        }
        VisitType::Outpatient => {
            assert!(record.admission_date.is_none(), "{id}");
        }
    }
}
