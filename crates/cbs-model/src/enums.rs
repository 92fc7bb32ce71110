//! Closed enumerations used by visit and billing records.
//!
//! Each enum exposes an `ALL` constant in draw order. The generator samples
//! from these slices directly, so reordering a variant list changes seeded
//! output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hospital department owning a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Cardiology,
    Oncology,
    Pediatrics,
    Neurology,
    Orthopedics,
}

impl Department {
    /// All departments in draw order.
    pub const ALL: [Department; 5] = [
        Department::Cardiology,
        Department::Oncology,
        Department::Pediatrics,
        Department::Neurology,
        Department::Orthopedics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Cardiology => "Cardiology",
            Department::Oncology => "Oncology",
            Department::Pediatrics => "Pediatrics",
            Department::Neurology => "Neurology",
            Department::Orthopedics => "Orthopedics",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    /// Parse a department name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Department::ALL
            .into_iter()
            .find(|department| department.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| format!("Unknown department: {s}"))
    }
}

/// Party responsible for paying a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayerType {
    Insurance,
    Government,
    #[serde(rename = "Self-pay")]
    SelfPay,
}

impl PayerType {
    /// All payer types in draw order.
    pub const ALL: [PayerType; 3] = [PayerType::Insurance, PayerType::Government, PayerType::SelfPay];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayerType::Insurance => "Insurance",
            PayerType::Government => "Government",
            PayerType::SelfPay => "Self-pay",
        }
    }

    pub fn is_self_pay(&self) -> bool {
        matches!(self, PayerType::SelfPay)
    }
}

impl fmt::Display for PayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PayerType {
    type Err = String;

    /// Accepts `Self-pay`, `SelfPay` and `Self pay` spellings (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "INSURANCE" => Ok(PayerType::Insurance),
            "GOVERNMENT" => Ok(PayerType::Government),
            "SELFPAY" => Ok(PayerType::SelfPay),
            _ => Err(format!("Unknown payer type: {s}")),
        }
    }
}

/// Lifecycle stage of a billing claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Submitted,
    Approved,
    Denied,
    Paid,
}

impl ClaimStatus {
    /// All claim statuses in draw order. `Paid` must stay last.
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Submitted,
        ClaimStatus::Approved,
        ClaimStatus::Denied,
        ClaimStatus::Paid,
    ];

    /// Statuses a payer-billed claim is drawn from: every status but the last.
    pub fn payer_billed() -> &'static [ClaimStatus] {
        &Self::ALL[..Self::ALL.len() - 1]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| format!("Unknown claim status: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitType {
    Inpatient,
    Outpatient,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::Inpatient => "Inpatient",
            VisitType::Outpatient => "Outpatient",
        }
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Yes/No flag as rendered in the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
