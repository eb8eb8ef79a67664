//! An in-memory reference provider for tests and embedding callers.

use std::collections::BTreeMap;

use aecc_model::{
    AgeBracket, DiagnosisGroup, Intercept, InteractionCoefficients, ProviderError,
    ReferenceProvider, ThresholdRow, TriageCoefficients,
};

/// Exact-key reference provider built up programmatically.
///
/// Unlike [`crate::ReferenceStore`], which resolves episode codes against
/// wide published-table rows, this provider answers only the exact keys it
/// was given. That makes test fixtures explicit: a lookup a test did not
/// stage is a miss, which the grouper treats as a zero contribution.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    diagnosis: BTreeMap<String, DiagnosisGroup>,
    intercepts: BTreeMap<(String, String), Intercept>,
    triage: BTreeMap<(String, String, String, String), TriageCoefficients>,
    ages: BTreeMap<(String, String), f64>,
    interactions: BTreeMap<(String, String, String), InteractionCoefficients>,
    thresholds: BTreeMap<String, Vec<ThresholdRow>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnosis(mut self, short_code: &str, group: DiagnosisGroup) -> Self {
        self.diagnosis.insert(short_code.to_string(), group);
        self
    }

    pub fn with_intercept(mut self, ecdg: &str, subgroup: &str, intercept: Intercept) -> Self {
        self.intercepts
            .insert((ecdg.to_string(), subgroup.to_string()), intercept);
        self
    }

    pub fn with_triage_coefficients(
        mut self,
        ecdg: &str,
        episode_end_status: &str,
        transport_mode: &str,
        triage_category: &str,
        coefficients: TriageCoefficients,
    ) -> Self {
        self.triage.insert(
            (
                ecdg.to_string(),
                episode_end_status.to_string(),
                transport_mode.to_string(),
                triage_category.to_string(),
            ),
            coefficients,
        );
        self
    }

    pub fn with_age_coefficient(mut self, ecdg: &str, bracket: AgeBracket, value: f64) -> Self {
        self.ages
            .insert((ecdg.to_string(), bracket.as_str().to_string()), value);
        self
    }

    pub fn with_interaction_coefficients(
        mut self,
        ecdg: &str,
        triage_category: &str,
        bracket: AgeBracket,
        coefficients: InteractionCoefficients,
    ) -> Self {
        self.interactions.insert(
            (
                ecdg.to_string(),
                triage_category.to_string(),
                bracket.as_str().to_string(),
            ),
            coefficients,
        );
        self
    }

    pub fn with_threshold(mut self, ecdg: &str, row: ThresholdRow) -> Self {
        let rows = self.thresholds.entry(ecdg.to_string()).or_default();
        rows.push(row);
        rows.sort_by(|a, b| b.min.total_cmp(&a.min));
        self
    }
}

impl ReferenceProvider for MemoryProvider {
    fn diagnosis_group(&self, short_code: &str) -> Result<Option<DiagnosisGroup>, ProviderError> {
        Ok(self.diagnosis.get(short_code).cloned())
    }

    fn intercept(&self, ecdg: &str, subgroup: &str) -> Result<Option<Intercept>, ProviderError> {
        Ok(self
            .intercepts
            .get(&(ecdg.to_string(), subgroup.to_string()))
            .copied())
    }

    fn triage_coefficients(
        &self,
        ecdg: &str,
        episode_end_status: &str,
        transport_mode: &str,
        triage_category: &str,
    ) -> Result<Option<TriageCoefficients>, ProviderError> {
        Ok(self
            .triage
            .get(&(
                ecdg.to_string(),
                episode_end_status.to_string(),
                transport_mode.to_string(),
                triage_category.to_string(),
            ))
            .copied())
    }

    fn age_coefficient(
        &self,
        ecdg: &str,
        age_bracket: AgeBracket,
    ) -> Result<Option<f64>, ProviderError> {
        Ok(self
            .ages
            .get(&(ecdg.to_string(), age_bracket.as_str().to_string()))
            .copied())
    }

    fn interaction_coefficients(
        &self,
        ecdg: &str,
        triage_category: &str,
        age_bracket: AgeBracket,
    ) -> Result<Option<InteractionCoefficients>, ProviderError> {
        Ok(self
            .interactions
            .get(&(
                ecdg.to_string(),
                triage_category.to_string(),
                age_bracket.as_str().to_string(),
            ))
            .copied())
    }

    fn threshold_rows(&self, ecdg: &str, score: f64) -> Result<Vec<ThresholdRow>, ProviderError> {
        let Some(rows) = self.thresholds.get(ecdg) else {
            return Ok(Vec::new());
        };
        Ok(rows.iter().filter(|r| r.min <= score).cloned().collect())
    }
}
