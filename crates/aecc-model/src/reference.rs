//! Reference-data contract between the grouping engine and its lookup store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::age::AgeBracket;

/// A principal diagnosis short list code mapped to its diagnosis group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisGroup {
    pub ecdg: String,
    pub ecdg_label: String,
    pub subgroup: String,
    pub subgroup_label: String,
}

/// Intercept pair for an (ECDG, subgroup) combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intercept {
    pub intercept: f64,
    pub sub_intercept: f64,
}

/// Regression terms resolved for one episode's end status, transport mode
/// and triage category within an ECDG. Axis values outside the recognized
/// enumerations resolve to 0.0 rather than failing the lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageCoefficients {
    pub episode_end_status: f64,
    pub transport_mode: f64,
    pub triage_category: f64,
}

/// Interaction terms for admitted episodes within an ECDG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionCoefficients {
    pub age: f64,
    pub triage: f64,
}

/// One complexity-score band within an ECDG.
///
/// Bands partition the score axis for their group: sorted by `min`
/// descending they must be totally ordered and non-overlapping, and `max`
/// may be unbounded (`f64::INFINITY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRow {
    pub label: String,
    pub class_code: String,
    pub min: f64,
    pub max: f64,
}

/// Failure of the reference store itself, as opposed to a lookup miss.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("reference store unavailable: {0}")]
    Unavailable(String),
    #[error("reference lookup failed: {0}")]
    Lookup(String),
}

/// Read-only lookups the grouper performs against the reference tables.
///
/// Miss semantics differ per lookup and the distinction is load-bearing: a
/// missing coefficient row (`Ok(None)`) contributes 0.0 to the predicted
/// value, a missing diagnosis mapping terminates the episode in `E9903Z`,
/// and an empty threshold answer leaves the episode unclassified. `Err` is
/// reserved for store/transport failures and always propagates.
///
/// Implementations must tolerate concurrent reads; the grouper itself holds
/// no mutable state between calls.
pub trait ReferenceProvider: Send + Sync {
    /// Resolve a normalized short list code to its ECDG and subcategory.
    fn diagnosis_group(&self, short_code: &str) -> Result<Option<DiagnosisGroup>, ProviderError>;

    /// Intercept pair for an (ECDG, subgroup) combination.
    fn intercept(&self, ecdg: &str, subgroup: &str) -> Result<Option<Intercept>, ProviderError>;

    /// End status, transport mode and triage terms for an ECDG.
    fn triage_coefficients(
        &self,
        ecdg: &str,
        episode_end_status: &str,
        transport_mode: &str,
        triage_category: &str,
    ) -> Result<Option<TriageCoefficients>, ProviderError>;

    /// Age group term for an ECDG.
    fn age_coefficient(
        &self,
        ecdg: &str,
        age_bracket: AgeBracket,
    ) -> Result<Option<f64>, ProviderError>;

    /// Interaction terms for an ECDG; the caller applies them only to
    /// admitted episodes.
    fn interaction_coefficients(
        &self,
        ecdg: &str,
        triage_category: &str,
        age_bracket: AgeBracket,
    ) -> Result<Option<InteractionCoefficients>, ProviderError>;

    /// Threshold rows for an ECDG with `min <= score`, sorted by `min`
    /// descending so the first row is the band the score falls in.
    fn threshold_rows(&self, ecdg: &str, score: f64) -> Result<Vec<ThresholdRow>, ProviderError>;
}
