//! Reference pack diagnostics.
//!
//! The grouper tolerates lookup misses at runtime, so a damaged pack tends
//! to surface as silently wrong scores or unclassified episodes. This check
//! reports the pack defects that cause those outcomes, most importantly
//! violations of the threshold-band invariant: for each ECDG the bands must
//! be totally ordered and non-overlapping when sorted by minimum score.

use std::collections::BTreeMap;
use std::fmt;

use crate::tables::{ReferenceTables, ThresholdTableRow};

/// One defect found in a reference pack.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TableIssue {
    /// Table file stem the defect was found in.
    pub table: String,
    /// ECDG the defect concerns, empty for pack-wide defects.
    pub ecdg: String,
    pub message: String,
}

impl TableIssue {
    fn new(table: &str, ecdg: &str, message: impl Into<String>) -> Self {
        Self {
            table: table.to_string(),
            ecdg: ecdg.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ecdg.is_empty() {
            write!(f, "{}: {}", self.table, self.message)
        } else {
            write!(f, "{}: {}: {}", self.table, self.ecdg, self.message)
        }
    }
}

/// Row counts for the check summary.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct TableCounts {
    pub diagnosis_codes: usize,
    pub intercepts: usize,
    pub triage_rows: usize,
    pub age_rows: usize,
    pub interaction_rows: usize,
    pub threshold_rows: usize,
}

impl TableCounts {
    pub fn from_tables(tables: &ReferenceTables) -> Self {
        Self {
            diagnosis_codes: tables.diagnosis_map.len(),
            intercepts: tables.intercepts.len(),
            triage_rows: tables.triage_coefficients.len(),
            age_rows: tables.age_coefficients.len(),
            interaction_rows: tables.interactions.len(),
            threshold_rows: tables.thresholds.len(),
        }
    }
}

/// Check a loaded pack and return every defect found, threshold issues
/// first, then duplicates, then non-finite coefficients.
pub fn check_tables(tables: &ReferenceTables) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    check_thresholds(&tables.thresholds, &mut issues);
    check_duplicates(tables, &mut issues);
    check_finite(tables, &mut issues);
    issues
}

fn check_thresholds(rows: &[ThresholdTableRow], issues: &mut Vec<TableIssue>) {
    const TABLE: &str = "complexity_score_thresholds";

    let mut by_group: BTreeMap<&str, Vec<&ThresholdTableRow>> = BTreeMap::new();
    for row in rows {
        by_group.entry(row.ecdg_code.as_str()).or_default().push(row);
    }

    for (ecdg, mut rows) in by_group {
        rows.sort_by(|a, b| a.min.total_cmp(&b.min));
        for row in &rows {
            if row.class_code.is_empty() {
                issues.push(TableIssue::new(
                    TABLE,
                    ecdg,
                    format!("band starting at {} has no class code", row.min),
                ));
            }
            if !(row.min < row.max) {
                issues.push(TableIssue::new(
                    TABLE,
                    ecdg,
                    format!(
                        "band {} is empty or inverted (min {}, max {})",
                        row.class_code, row.min, row.max
                    ),
                ));
            }
        }
        for pair in rows.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if upper.min < lower.max {
                issues.push(TableIssue::new(
                    TABLE,
                    ecdg,
                    format!(
                        "bands {} and {} overlap between {} and {}",
                        lower.class_code, upper.class_code, upper.min, lower.max
                    ),
                ));
            } else if upper.min > lower.max {
                issues.push(TableIssue::new(
                    TABLE,
                    ecdg,
                    format!(
                        "gap between bands {} and {} from {} to {}",
                        lower.class_code, upper.class_code, lower.max, upper.min
                    ),
                ));
            }
        }
    }
}

fn check_duplicates(tables: &ReferenceTables, issues: &mut Vec<TableIssue>) {
    let mut seen_codes = BTreeMap::new();
    for row in &tables.diagnosis_map {
        let count = seen_codes.entry(row.short_code.as_str()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            issues.push(TableIssue::new(
                "diagnosis_short_list_map",
                &row.ecdg_code,
                format!("short list code {} appears more than once", row.short_code),
            ));
        }
    }

    let mut seen_intercepts = BTreeMap::new();
    for row in &tables.intercepts {
        let key = (row.ecdg_code.as_str(), row.ecdg_sub.as_str());
        let count = seen_intercepts.entry(key).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            issues.push(TableIssue::new(
                "ecdg_intercepts",
                &row.ecdg_code,
                format!("duplicate intercept row for subgroup {}", row.ecdg_sub),
            ));
        }
    }

    for (table, keys) in [
        (
            "ecdg_triage_coefficients",
            tables
                .triage_coefficients
                .iter()
                .map(|(ecdg, _)| ecdg.as_str())
                .collect::<Vec<_>>(),
        ),
        (
            "ecdg_age_coefficients",
            tables
                .age_coefficients
                .iter()
                .map(|(ecdg, _)| ecdg.as_str())
                .collect(),
        ),
        (
            "ecdg_interactions",
            tables
                .interactions
                .iter()
                .map(|(ecdg, _)| ecdg.as_str())
                .collect(),
        ),
    ] {
        let mut seen = BTreeMap::new();
        for ecdg in keys {
            let count = seen.entry(ecdg).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                issues.push(TableIssue::new(table, ecdg, "duplicate coefficient row"));
            }
        }
    }
}

fn check_finite(tables: &ReferenceTables, issues: &mut Vec<TableIssue>) {
    for row in &tables.intercepts {
        if !row.intercept.is_finite() || !row.intercept_sub.is_finite() {
            issues.push(TableIssue::new(
                "ecdg_intercepts",
                &row.ecdg_code,
                format!("non-finite intercept for subgroup {}", row.ecdg_sub),
            ));
        }
    }
    for (ecdg, row) in &tables.triage_coefficients {
        let values = [
            row.admitted,
            row.died_in_ed,
            row.left_at_own_risk,
            row.referred,
            row.arrival_by_ambulance,
            row.triage_category1,
            row.triage_category2,
            row.triage_category3,
            row.triage_category4,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            issues.push(TableIssue::new(
                "ecdg_triage_coefficients",
                ecdg,
                "non-finite coefficient",
            ));
        }
    }
    for (ecdg, row) in &tables.age_coefficients {
        let values = [
            row.age_5_9,
            row.age_10_14,
            row.age_15_69,
            row.age_70_74,
            row.age_75_79,
            row.age_80_84,
            row.age_85_plus,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            issues.push(TableIssue::new(
                "ecdg_age_coefficients",
                ecdg,
                "non-finite coefficient",
            ));
        }
    }
    for (ecdg, row) in &tables.interactions {
        let values = [
            row.age_0_4,
            row.age_5_9,
            row.age_10_14,
            row.age_80_84,
            row.age_85_plus,
            row.triage_category1,
            row.triage_category2,
            row.triage_category3,
            row.triage_category4,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            issues.push(TableIssue::new(
                "ecdg_interactions",
                ecdg,
                "non-finite coefficient",
            ));
        }
    }
    for row in &tables.thresholds {
        // min must be finite; an unbounded max is expected on the top band.
        if !row.min.is_finite() || row.max.is_nan() {
            issues.push(TableIssue::new(
                "complexity_score_thresholds",
                &row.ecdg_code,
                format!("non-finite bound on band {}", row.class_code),
            ));
        }
    }
}
