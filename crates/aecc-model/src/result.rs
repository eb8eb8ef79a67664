//! The per-episode grouping outcome.

use serde::{Deserialize, Serialize};

use crate::episode::EpisodeInput;

/// Everything the grouper derived for one episode, plus the echoed inputs.
///
/// Created fresh per classification call and owned by the caller. Numeric
/// fields stay at 0.0 and derived strings stay empty until the stage that
/// produces them runs; a terminal class short-circuits the remaining stages,
/// so exactly one end class is ever written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingResult {
    pub episode_number: String,
    pub triage_category: String,
    pub episode_end_status: String,
    pub visit_type: String,
    pub age_years: String,
    pub transport_mode: String,
    pub principal_diagnosis: String,
    pub service_date: String,

    /// Emergency care diagnosis group assigned in Step 2.
    pub ecdg: String,
    /// ECDG subcategory assigned in Step 2.
    pub ecdg_subgroup: String,
    /// Age bracket label derived in Step 3.
    pub age_bracket: String,

    pub intercept: f64,
    pub sub_intercept: f64,
    pub transport_mode_coefficient: f64,
    pub episode_end_status_coefficient: f64,
    pub triage_category_coefficient: f64,
    pub age_group_coefficient: f64,
    /// Age interaction term as resolved from the reference tables.
    pub age_interaction: f64,
    /// Triage interaction term as resolved from the reference tables.
    pub triage_interaction: f64,
    /// Interaction contribution actually applied to the predicted value.
    /// Zero unless the episode end status is admitted.
    pub interaction: f64,

    /// Sum of the applied coefficients.
    pub predicted_value: f64,
    /// Rescaled complexity score, never negative.
    pub complexity_score: f64,
    /// Terminal AECC end class. Empty when scoring completed but no
    /// complexity-score threshold row matched (a reference-data defect).
    pub end_class: String,
}

impl GroupingResult {
    /// Start a result by echoing the source episode attributes.
    pub fn from_input(input: &EpisodeInput) -> Self {
        Self {
            episode_number: input.episode_number.clone(),
            triage_category: input.triage_category.clone(),
            episode_end_status: input.episode_end_status.clone(),
            visit_type: input.visit_type.clone(),
            age_years: input.age_years.clone(),
            transport_mode: input.transport_mode.clone(),
            principal_diagnosis: input.principal_diagnosis.clone(),
            service_date: input.service_date.clone(),
            ..Self::default()
        }
    }

    /// True once a terminal end class has been assigned.
    ///
    /// A finished result with no end class means the complexity score fell
    /// outside every threshold row for its ECDG; callers should treat that
    /// as reference-pack breakage rather than a classification outcome.
    pub fn is_classified(&self) -> bool {
        !self.end_class.is_empty()
    }
}
