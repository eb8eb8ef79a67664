//! Row shapes of the published AECC reference tables.
//!
//! The coefficient tables are wide: one row per ECDG with a column per
//! recognized axis value. Resolving an episode's codes against a row is part
//! of the published table semantics, so the column-selection logic lives
//! here with the rows; values outside the recognized enumerations resolve to
//! 0.0 ("no contribution") rather than failing.

use aecc_model::{AgeBracket, codes};

/// Appendix C: principal diagnosis short list code to ECDG map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosisMapRow {
    pub ecc_code: String,
    pub ecc_label: String,
    pub ecdg_code: String,
    pub ecdg_label: String,
    pub ecdg_sub: String,
    pub ecdg_sub_label: String,
    pub short_code: String,
    pub term: String,
}

/// Appendix D1: intercept and subcategory intercept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterceptRow {
    pub ecdg_code: String,
    pub ecdg_sub: String,
    pub intercept: f64,
    pub intercept_sub: f64,
}

/// Appendix D2: transport mode, episode end status and triage category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriageCoefficientRow {
    pub admitted: f64,
    pub died_in_ed: f64,
    pub left_at_own_risk: f64,
    pub referred: f64,
    pub arrival_by_ambulance: f64,
    pub triage_category1: f64,
    pub triage_category2: f64,
    pub triage_category3: f64,
    pub triage_category4: f64,
}

impl TriageCoefficientRow {
    /// Episode end status term. Departed (2) is the regression baseline and
    /// carries no column.
    pub fn end_status_term(&self, episode_end_status: &str) -> f64 {
        match episode_end_status {
            codes::episode_end_status::ADMITTED => self.admitted,
            codes::episode_end_status::REFERRED => self.referred,
            codes::episode_end_status::LEFT_AT_OWN_RISK => self.left_at_own_risk,
            codes::episode_end_status::DIED_IN_ED => self.died_in_ed,
            _ => 0.0,
        }
    }

    /// Transport mode term; only ambulance arrival carries a column.
    pub fn transport_term(&self, transport_mode: &str) -> f64 {
        match transport_mode {
            codes::transport_mode::AMBULANCE => self.arrival_by_ambulance,
            _ => 0.0,
        }
    }

    /// Triage category term. Category 5 is the regression baseline.
    pub fn triage_term(&self, triage_category: &str) -> f64 {
        match triage_category {
            "1" => self.triage_category1,
            "2" => self.triage_category2,
            "3" => self.triage_category3,
            "4" => self.triage_category4,
            _ => 0.0,
        }
    }
}

/// Appendix D3: age group. Bracket 0-4 is the regression baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgeCoefficientRow {
    pub age_5_9: f64,
    pub age_10_14: f64,
    pub age_15_69: f64,
    pub age_70_74: f64,
    pub age_75_79: f64,
    pub age_80_84: f64,
    pub age_85_plus: f64,
}

impl AgeCoefficientRow {
    pub fn term(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::Age5To9 => self.age_5_9,
            AgeBracket::Age10To14 => self.age_10_14,
            AgeBracket::Age15To69 => self.age_15_69,
            AgeBracket::Age70To74 => self.age_70_74,
            AgeBracket::Age75To79 => self.age_75_79,
            AgeBracket::Age80To84 => self.age_80_84,
            AgeBracket::Age85Plus => self.age_85_plus,
            AgeBracket::Age0To4 | AgeBracket::Other => 0.0,
        }
    }
}

/// Appendix D4: interactions with episode end status of admitted. Only the
/// listed brackets and triage categories 1 to 4 carry columns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionRow {
    pub age_0_4: f64,
    pub age_5_9: f64,
    pub age_10_14: f64,
    pub age_80_84: f64,
    pub age_85_plus: f64,
    pub triage_category1: f64,
    pub triage_category2: f64,
    pub triage_category3: f64,
    pub triage_category4: f64,
}

impl InteractionRow {
    pub fn age_term(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::Age0To4 => self.age_0_4,
            AgeBracket::Age5To9 => self.age_5_9,
            AgeBracket::Age10To14 => self.age_10_14,
            AgeBracket::Age80To84 => self.age_80_84,
            AgeBracket::Age85Plus => self.age_85_plus,
            _ => 0.0,
        }
    }

    pub fn triage_term(&self, triage_category: &str) -> f64 {
        match triage_category {
            "1" => self.triage_category1,
            "2" => self.triage_category2,
            "3" => self.triage_category3,
            "4" => self.triage_category4,
            _ => 0.0,
        }
    }
}

/// Appendix E: complexity score thresholds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdTableRow {
    pub ecdg_code: String,
    pub label: String,
    pub class_code: String,
    pub min: f64,
    pub max: f64,
}

/// One loaded reference pack, still in published-table shape.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub diagnosis_map: Vec<DiagnosisMapRow>,
    /// Keyed rows; the ECDG code travels alongside each coefficient row.
    pub intercepts: Vec<InterceptRow>,
    pub triage_coefficients: Vec<(String, TriageCoefficientRow)>,
    pub age_coefficients: Vec<(String, AgeCoefficientRow)>,
    pub interactions: Vec<(String, InteractionRow)>,
    pub thresholds: Vec<ThresholdTableRow>,
}
