//! The file-backed reference provider.

use std::collections::BTreeMap;
use std::path::Path;

use aecc_model::{
    AgeBracket, DiagnosisGroup, Intercept, InteractionCoefficients, ProviderError,
    ReferenceProvider, ThresholdRow, TriageCoefficients,
};

use crate::error::StandardsError;
use crate::loaders::load_tables;
use crate::tables::{AgeCoefficientRow, InteractionRow, ReferenceTables, TriageCoefficientRow};

/// Indexed reference pack.
///
/// Loaded once from a pack directory (or built from already-parsed tables)
/// and then read-only, so a single store can serve concurrent grouping
/// calls. Duplicate keys keep the last row; `doctor::check_tables` reports
/// duplicates so packs can be fixed at the source.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    diagnosis: BTreeMap<String, DiagnosisGroup>,
    intercepts: BTreeMap<(String, String), Intercept>,
    triage: BTreeMap<String, TriageCoefficientRow>,
    ages: BTreeMap<String, AgeCoefficientRow>,
    interactions: BTreeMap<String, InteractionRow>,
    thresholds: BTreeMap<String, Vec<ThresholdRow>>,
}

impl ReferenceStore {
    /// Load and index a reference pack directory.
    pub fn load(dir: &Path) -> Result<Self, StandardsError> {
        Ok(Self::from_tables(&load_tables(dir)?))
    }

    /// Index already-loaded tables.
    pub fn from_tables(tables: &ReferenceTables) -> Self {
        let mut store = Self::default();
        for row in &tables.diagnosis_map {
            store.diagnosis.insert(
                row.short_code.clone(),
                DiagnosisGroup {
                    ecdg: row.ecdg_code.clone(),
                    ecdg_label: row.ecdg_label.clone(),
                    subgroup: row.ecdg_sub.clone(),
                    subgroup_label: row.ecdg_sub_label.clone(),
                },
            );
        }
        for row in &tables.intercepts {
            store.intercepts.insert(
                (row.ecdg_code.clone(), row.ecdg_sub.clone()),
                Intercept {
                    intercept: row.intercept,
                    sub_intercept: row.intercept_sub,
                },
            );
        }
        for (ecdg, row) in &tables.triage_coefficients {
            store.triage.insert(ecdg.clone(), *row);
        }
        for (ecdg, row) in &tables.age_coefficients {
            store.ages.insert(ecdg.clone(), *row);
        }
        for (ecdg, row) in &tables.interactions {
            store.interactions.insert(ecdg.clone(), *row);
        }
        for row in &tables.thresholds {
            store
                .thresholds
                .entry(row.ecdg_code.clone())
                .or_default()
                .push(ThresholdRow {
                    label: row.label.clone(),
                    class_code: row.class_code.clone(),
                    min: row.min,
                    max: row.max,
                });
        }
        for rows in store.thresholds.values_mut() {
            rows.sort_by(|a, b| b.min.total_cmp(&a.min));
        }
        store
    }

    /// Number of diagnosis short list codes in the pack.
    pub fn diagnosis_count(&self) -> usize {
        self.diagnosis.len()
    }

    /// Number of ECDGs with at least one threshold row.
    pub fn threshold_group_count(&self) -> usize {
        self.thresholds.len()
    }
}

impl ReferenceProvider for ReferenceStore {
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
        Ok(self.triage.get(ecdg).map(|row| TriageCoefficients {
            episode_end_status: row.end_status_term(episode_end_status),
            transport_mode: row.transport_term(transport_mode),
            triage_category: row.triage_term(triage_category),
        }))
    }

    fn age_coefficient(
        &self,
        ecdg: &str,
        age_bracket: AgeBracket,
    ) -> Result<Option<f64>, ProviderError> {
        Ok(self.ages.get(ecdg).map(|row| row.term(age_bracket)))
    }

    fn interaction_coefficients(
        &self,
        ecdg: &str,
        triage_category: &str,
        age_bracket: AgeBracket,
    ) -> Result<Option<InteractionCoefficients>, ProviderError> {
        Ok(self
            .interactions
            .get(ecdg)
            .map(|row| InteractionCoefficients {
                age: row.age_term(age_bracket),
                triage: row.triage_term(triage_category),
            }))
    }

    fn threshold_rows(&self, ecdg: &str, score: f64) -> Result<Vec<ThresholdRow>, ProviderError> {
        let Some(rows) = self.thresholds.get(ecdg) else {
            return Ok(Vec::new());
        };
        // Rows are already sorted by min descending.
        Ok(rows.iter().filter(|r| r.min <= score).cloned().collect())
    }
}
