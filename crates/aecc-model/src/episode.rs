//! Raw episode attributes as received from upstream extraction.

use serde::{Deserialize, Serialize};

/// The eight episode attributes the grouper consumes, exactly as extracted.
///
/// Every field is free-form text. The grouper owns all validation and
/// normalization (separator stripping, date and age parsing), so callers
/// pass values through without coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeInput {
    /// Episode identifier, echoed onto the result unchanged.
    pub episode_number: String,
    /// Triage category assigned at presentation (1 to 5).
    pub triage_category: String,
    /// Episode end status code.
    pub episode_end_status: String,
    /// Type of visit to the emergency department.
    pub visit_type: String,
    /// Age in completed years; may be blank or non-numeric.
    pub age_years: String,
    /// Transport mode on arrival.
    pub transport_mode: String,
    /// ICD-10-AM principal diagnosis short list code; may contain periods.
    pub principal_diagnosis: String,
    /// Clinical care commencement date/time.
    pub service_date: String,
}
