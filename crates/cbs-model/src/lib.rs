pub mod enums;
pub mod error;
pub mod profile;
pub mod record;

pub use enums::{ClaimStatus, Department, Gender, PayerType, VisitType, YesNo};
pub use error::{Result, SynthError};
pub use profile::{DepartmentProfile, InclusiveRange, validate_profiles};
pub use record::{
    NullableField, PatientVisitRecord, SELF_PAY_INSURANCE_ID, SELF_PAY_PAYER_NAME, appointment_id,
};
