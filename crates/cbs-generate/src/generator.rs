//! Turns a department profile and the run generator into one visit record.
//!
//! Draws happen in a fixed order: department, age, diagnosis, visit reason,
//! payer type, payer name, claim status, charge, payment, visit date,
//! inpatient flag, length of stay, patient id, gender, physician id,
//! emergency flag, insurance id. Self-pay records skip the payer-name,
//! claim-status and insurance-id draws, outpatient records skip the
//! length-of-stay draw.

use std::ops::RangeInclusive;

use cbs_model::{
    ClaimStatus, Department, Gender, PatientVisitRecord, PayerType, Result,
    SELF_PAY_INSURANCE_ID, SELF_PAY_PAYER_NAME, SynthError, VisitType, YesNo, appointment_id,
};
use chrono::{Days, Months, NaiveDate};
use rand::Rng;

use crate::payers::PayerPool;
use crate::rng::pick;

pub const PATIENT_ID_RANGE: RangeInclusive<u32> = 110_000..=220_000;
pub const PHYSICIAN_ID_RANGE: RangeInclusive<u32> = 10_000..=99_999;

/// Inpatient stay length in days.
pub const LENGTH_OF_STAY_RANGE: RangeInclusive<u64> = 1..=29;

/// Visit dates fall within this many months before the reference date.
pub const VISIT_WINDOW_MONTHS: u32 = 24;

pub const INSURANCE_ID_PREFIX: &str = "INS-";
pub const INSURANCE_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const INSURANCE_ID_LEN: usize = 6;

/// Generates records against one payer pool and one visit-date window.
#[derive(Debug, Clone)]
pub struct RecordGenerator<'a> {
    payers: &'a PayerPool,
    window_start: NaiveDate,
    reference_date: NaiveDate,
}

impl<'a> RecordGenerator<'a> {
    /// Create a generator whose visit dates end at `reference_date`.
    pub fn new(payers: &'a PayerPool, reference_date: NaiveDate) -> Result<Self> {
        let window_start = reference_date
            .checked_sub_months(Months::new(VISIT_WINDOW_MONTHS))
            .ok_or(SynthError::InvalidReferenceDate(reference_date))?;
        Ok(Self {
            payers,
            window_start,
            reference_date,
        })
    }

    /// Inclusive bounds of generated visit dates.
    pub fn visit_window(&self) -> (NaiveDate, NaiveDate) {
        (self.window_start, self.reference_date)
    }

    /// Generate the record at sequence position `index`.
    pub fn generate<R: Rng>(&self, index: usize, rng: &mut R) -> Result<PatientVisitRecord> {
        let department = *pick(&Department::ALL, rng);
        let profile = department.profile();

        let age = rng.random_range(profile.age_range.min..=profile.age_range.max);
        let diagnosis = *pick(profile.diagnoses, rng);
        let visit_reason = *pick(profile.visit_reasons, rng);

        let payer_type = *pick(&PayerType::ALL, rng);
        let self_pay = payer_type.is_self_pay();
        let payer_name = if self_pay {
            SELF_PAY_PAYER_NAME.to_string()
        } else {
            self.payers.choose(rng).to_string()
        };
        let claim_status = if self_pay {
            ClaimStatus::Paid
        } else {
            *pick(ClaimStatus::payer_billed(), rng)
        };

        let charge_amount = rng.random_range(profile.charge_range.min..=profile.charge_range.max);
        if charge_amount == 0 {
            return Err(SynthError::NonPositiveCharge {
                department,
                amount: charge_amount,
            });
        }
        let payment_amount = payment_amount(claim_status, payer_type, charge_amount, rng);

        let visit_date = self.visit_date(rng)?;
        let inpatient = rng.random_bool(0.5);
        let (visit_type, admission_date, discharge_date) = if inpatient {
            let stay = rng.random_range(LENGTH_OF_STAY_RANGE);
            let discharge = visit_date
                .checked_add_days(Days::new(stay))
                .ok_or(SynthError::InvalidReferenceDate(self.reference_date))?;
            (VisitType::Inpatient, Some(visit_date), Some(discharge))
        } else {
            (VisitType::Outpatient, None, None)
        };

        let patient_id = rng.random_range(PATIENT_ID_RANGE);
        let gender = *pick(&Gender::ALL, rng);
        let physician_id = rng.random_range(PHYSICIAN_ID_RANGE);
        let is_emergency = *pick(&YesNo::ALL, rng);
        let insurance_id = if self_pay {
            SELF_PAY_INSURANCE_ID.to_string()
        } else {
            insurance_id(rng)
        };

        Ok(PatientVisitRecord {
            patient_id,
            physician_id,
            appointment_id: appointment_id(index),
            gender,
            age,
            department,
            diagnosis: Some(diagnosis),
            visit_reason: Some(visit_reason),
            is_emergency,
            visit_date,
            visit_type,
            admission_date,
            discharge_date,
            insurance_id: Some(insurance_id),
            payer_name: Some(payer_name),
            payer_type,
            claim_status,
            charge_amount,
            payment_amount,
        })
    }

    fn visit_date<R: Rng>(&self, rng: &mut R) -> Result<NaiveDate> {
        let span = (self.reference_date - self.window_start).num_days().max(0) as u64;
        let offset = rng.random_range(0..=span);
        self.window_start
            .checked_add_days(Days::new(offset))
            .ok_or(SynthError::InvalidReferenceDate(self.reference_date))
    }
}

/// Amount collected for a claim.
///
/// Unpaid claims collect nothing and self-pay claims collect the full charge.
/// A paid payer-billed claim draws between 80% (rounded up) and 100% of the
/// charge.
pub fn payment_amount<R: Rng>(
    claim_status: ClaimStatus,
    payer_type: PayerType,
    charge_amount: u32,
    rng: &mut R,
) -> u32 {
    match (claim_status, payer_type) {
        (ClaimStatus::Paid, PayerType::SelfPay) => charge_amount,
        (ClaimStatus::Paid, _) => {
            let floor = (u64::from(charge_amount) * 4).div_ceil(5) as u32;
            rng.random_range(floor..=charge_amount)
        }
        _ => 0,
    }
}

/// `INS-` followed by six characters drawn with replacement from A-Z0-9.
pub fn insurance_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(INSURANCE_ID_PREFIX.len() + INSURANCE_ID_LEN);
    id.push_str(INSURANCE_ID_PREFIX);
    for _ in 0..INSURANCE_ID_LEN {
        id.push(char::from(*pick(INSURANCE_ID_ALPHABET, rng)));
    }
    id
}
