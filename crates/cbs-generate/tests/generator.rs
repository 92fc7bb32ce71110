//! Record generator behaviour.

mod common;

use cbs_generate::{PayerPool, RecordGenerator, insurance_id, payment_amount, seeded_rng};
use cbs_model::{ClaimStatus, PayerType, SynthError, appointment_id};
use chrono::{Months, NaiveDate};
use proptest::prelude::*;

use common::{assert_consistent, is_insurance_id, reference_date};

fn test_pool() -> PayerPool {
    PayerPool::from_names(["Acme Health", "Blue Meadow Mutual", "Civic Care"]).unwrap()
}

#[test]
fn generated_records_are_consistent() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
    let mut rng = seeded_rng(7);
    for index in 0..2_000 {
        let record = generator.generate(index, &mut rng).unwrap();
        assert_eq!(record.appointment_id, appointment_id(index));
        assert_consistent(&record, generator.visit_window());
    }
}

#[test]
fn uncorrupted_records_have_every_nullable_field() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
    let mut rng = seeded_rng(11);
    for index in 0..500 {
        let record = generator.generate(index, &mut rng).unwrap();
        assert!(record.diagnosis.is_some());
        assert!(record.visit_reason.is_some());
        assert!(record.payer_name.is_some());
        assert!(record.insurance_id.is_some());
        if record.payer_type != PayerType::SelfPay {
            let name = record.payer_name.as_deref().unwrap();
            assert!(pool.names().iter().any(|candidate| candidate == name));
        }
    }
}

#[test]
fn self_pay_records_are_paid_in_full() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
    let mut rng = seeded_rng(3);
    let mut self_pay = 0;
    for index in 0..1_000 {
        let record = generator.generate(index, &mut rng).unwrap();
        if record.payer_type == PayerType::SelfPay {
            self_pay += 1;
            assert_eq!(record.claim_status, ClaimStatus::Paid);
            assert_eq!(record.insurance_id.as_deref(), Some("N/A"));
            assert_eq!(record.payer_name.as_deref(), Some("Self-pay"));
            assert_eq!(record.payment_amount, record.charge_amount);
        }
    }
    assert!(self_pay > 0);
}

#[test]
fn payer_billed_claims_never_reach_paid() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
    let mut rng = seeded_rng(5);
    let mut seen = std::collections::BTreeSet::new();
    for index in 0..1_000 {
        let record = generator.generate(index, &mut rng).unwrap();
        if record.payer_type != PayerType::SelfPay {
            assert_ne!(record.claim_status, ClaimStatus::Paid);
            assert_eq!(record.payment_amount, 0);
            seen.insert(record.claim_status);
        }
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn same_seed_same_records() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
    let mut first = seeded_rng(99);
    let mut second = seeded_rng(99);
    for index in 0..100 {
        assert_eq!(
            generator.generate(index, &mut first).unwrap(),
            generator.generate(index, &mut second).unwrap()
        );
    }
}

#[test]
fn visit_window_spans_two_years() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
    let (start, end) = generator.visit_window();
    assert_eq!(end, reference_date());
    assert_eq!(start, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
    assert_eq!(start.checked_add_months(Months::new(24)), Some(end));
}

#[test]
fn reference_date_without_window_is_rejected() {
    let pool = test_pool();
    let err = RecordGenerator::new(&pool, NaiveDate::MIN).unwrap_err();
    assert!(matches!(err, SynthError::InvalidReferenceDate(_)));
}

#[test]
fn calendar_end_reference_date_errors_instead_of_clamping() {
    let pool = test_pool();
    let generator = RecordGenerator::new(&pool, NaiveDate::MAX).unwrap();
    let (start, end) = generator.visit_window();
    let mut rng = seeded_rng(8);
    let mut overflowed = 0;
    for index in 0..2_000 {
        match generator.generate(index, &mut rng) {
            Ok(record) => {
                assert!(record.visit_date >= start && record.visit_date <= end);
                if let Some(discharge) = record.discharge_date {
                    assert!(discharge > record.visit_date);
                }
            }
            Err(SynthError::InvalidReferenceDate(date)) => {
                assert_eq!(date, NaiveDate::MAX);
                overflowed += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(overflowed > 0);
}

#[test]
fn paid_payer_claim_collects_at_least_eighty_percent() {
    let mut rng = seeded_rng(1);
    let mut low = u32::MAX;
    for _ in 0..2_000 {
        let amount = payment_amount(ClaimStatus::Paid, PayerType::Insurance, 101, &mut rng);
        assert!((81..=101).contains(&amount), "{amount}");
        low = low.min(amount);
    }
    assert_eq!(low, 81);
}

#[test]
fn payment_rules_without_draws() {
    let mut rng = seeded_rng(1);
    assert_eq!(
        payment_amount(ClaimStatus::Paid, PayerType::SelfPay, 250, &mut rng),
        250
    );
    for status in [
        ClaimStatus::Submitted,
        ClaimStatus::Approved,
        ClaimStatus::Denied,
    ] {
        assert_eq!(
            payment_amount(status, PayerType::Government, 250, &mut rng),
            0
        );
    }
}

#[test]
fn insurance_ids_use_uppercase_alphanumerics() {
    let mut rng = seeded_rng(21);
    for _ in 0..500 {
        let id = insurance_id(&mut rng);
        assert!(is_insurance_id(&id), "{id}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_seed_produces_consistent_records(seed in any::<u64>()) {
        let pool = test_pool();
        let generator = RecordGenerator::new(&pool, reference_date()).unwrap();
        let mut rng = seeded_rng(seed);
        for index in 0..100 {
            let record = generator.generate(index, &mut rng).unwrap();
            assert_consistent(&record, generator.visit_window());
        }
    }
}
