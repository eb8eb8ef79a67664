//! Input normalization: diagnosis code cleanup, date and age parsing.
//!
//! Parse failures never fail a classification call; they feed the Step 1
//! and Step 3 gates as "missing or invalid" facts.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Strip separator punctuation from a principal diagnosis short list code.
///
/// Extracts report short list codes both with and without the ICD-10-AM
/// period (`F03.00` vs `F0300`); the reference map stores them without.
pub fn normalize_diagnosis_code(raw: &str) -> String {
    raw.replace('.', "")
}

/// Date/time layouts accepted for clinical care commencement. Extracts use
/// the day-first form; ISO 8601 is accepted for other upstream systems.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d"];

/// Parse a clinical care commencement date/time; `None` means missing or
/// invalid.
pub fn parse_service_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for layout in DATE_TIME_LAYOUTS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(datetime);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, layout) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Parse age in completed years; `None` means not reported or unparseable,
/// which downstream bracket resolution must keep distinct from age 0.
pub fn parse_age_years(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
