//! Fixed end classes assigned outside the complexity-score pathway.
//!
//! The grouper can terminate before scoring in two ways: the pre-ECDG
//! classes of Step 1 (administrative dispositions that never reach clinical
//! scoring) and the error classes raised by the validation gates of Steps 2
//! and 3. Final classes within an ECDG (suffix Z for unsplit groups, A to D
//! for split ones) are reference data and are not enumerated here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pre-ECDG classes assigned in Step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreEcdgClass {
    /// E0001Z Not attended by a healthcare professional.
    NotAttended,
    /// E0002Z Planned return visit.
    PlannedReturn,
    /// E0003Z Dead on arrival.
    DeadOnArrival,
}

/// Listing order for reporting.
pub const PRE_ECDG_CLASSES: [PreEcdgClass; 3] = [
    PreEcdgClass::NotAttended,
    PreEcdgClass::PlannedReturn,
    PreEcdgClass::DeadOnArrival,
];

impl PreEcdgClass {
    pub const fn code(&self) -> &'static str {
        match self {
            PreEcdgClass::NotAttended => "E0001Z",
            PreEcdgClass::PlannedReturn => "E0002Z",
            PreEcdgClass::DeadOnArrival => "E0003Z",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PreEcdgClass::NotAttended => "Not attended by a healthcare professional",
            PreEcdgClass::PlannedReturn => "Planned return visit",
            PreEcdgClass::DeadOnArrival => "Dead on arrival",
        }
    }
}

impl fmt::Display for PreEcdgClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error classes raised by the Step 2 and Step 3 validation gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorClass {
    /// E9901Z Invalid visit type.
    InvalidVisitType,
    /// E9902Z Missing principal diagnosis short list code.
    MissingDiagnosis,
    /// E9903Z Invalid principal diagnosis short list code.
    InvalidDiagnosis,
    /// E9904Z Other error: invalid or missing transport mode, episode end
    /// status, triage category or age group.
    OtherError,
}

/// Listing order for reporting.
pub const ERROR_CLASSES: [ErrorClass; 4] = [
    ErrorClass::InvalidVisitType,
    ErrorClass::MissingDiagnosis,
    ErrorClass::InvalidDiagnosis,
    ErrorClass::OtherError,
];

impl ErrorClass {
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorClass::InvalidVisitType => "E9901Z",
            ErrorClass::MissingDiagnosis => "E9902Z",
            ErrorClass::InvalidDiagnosis => "E9903Z",
            ErrorClass::OtherError => "E9904Z",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorClass::InvalidVisitType => "Invalid visit type",
            ErrorClass::MissingDiagnosis => "Missing principal diagnosis short list code",
            ErrorClass::InvalidDiagnosis => "Invalid principal diagnosis short list code",
            ErrorClass::OtherError => "Other error",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
