//! Loaders for the six reference pack files.
//!
//! File names follow the published appendix tables. Every loader validates
//! the column set up front so a truncated or reshuffled export fails with a
//! named column rather than silently loading zeros.

use std::path::Path;

use tracing::debug;

use crate::csv_utils::{default_tables_root, get_field, parse_number, read_csv_rows, require_columns};
use crate::error::StandardsError;
use crate::tables::{
    AgeCoefficientRow, DiagnosisMapRow, InterceptRow, InteractionRow, ReferenceTables,
    ThresholdTableRow, TriageCoefficientRow,
};

pub const DIAGNOSIS_MAP_FILE: &str = "diagnosis_short_list_map.csv";
pub const INTERCEPTS_FILE: &str = "ecdg_intercepts.csv";
pub const TRIAGE_COEFFICIENTS_FILE: &str = "ecdg_triage_coefficients.csv";
pub const AGE_COEFFICIENTS_FILE: &str = "ecdg_age_coefficients.csv";
pub const INTERACTIONS_FILE: &str = "ecdg_interactions.csv";
pub const THRESHOLDS_FILE: &str = "complexity_score_thresholds.csv";

/// Load a full reference pack from a directory.
pub fn load_tables(dir: &Path) -> Result<ReferenceTables, StandardsError> {
    let tables = ReferenceTables {
        diagnosis_map: load_diagnosis_map(&dir.join(DIAGNOSIS_MAP_FILE))?,
        intercepts: load_intercepts(&dir.join(INTERCEPTS_FILE))?,
        triage_coefficients: load_triage_coefficients(&dir.join(TRIAGE_COEFFICIENTS_FILE))?,
        age_coefficients: load_age_coefficients(&dir.join(AGE_COEFFICIENTS_FILE))?,
        interactions: load_interactions(&dir.join(INTERACTIONS_FILE))?,
        thresholds: load_thresholds(&dir.join(THRESHOLDS_FILE))?,
    };
    debug!(
        diagnosis_codes = tables.diagnosis_map.len(),
        intercepts = tables.intercepts.len(),
        threshold_rows = tables.thresholds.len(),
        "loaded reference pack"
    );
    Ok(tables)
}

/// Load the reference pack from the default root (`AECC_TABLES_DIR` or the
/// workspace `tables/` directory).
pub fn load_default_tables() -> Result<ReferenceTables, StandardsError> {
    load_tables(&default_tables_root())
}

pub fn load_diagnosis_map(path: &Path) -> Result<Vec<DiagnosisMapRow>, StandardsError> {
    let (headers, rows) = read_csv_rows(path)?;
    require_columns(
        path,
        &headers,
        &["ecdg_code", "ecdg_sub", "shortlist_code"],
    )?;

    let mut results = Vec::new();
    for row in rows {
        let short_code = get_field(&row, "shortlist_code");
        if short_code.is_empty() {
            continue;
        }
        results.push(DiagnosisMapRow {
            ecc_code: get_field(&row, "ecc_code"),
            ecc_label: get_field(&row, "ecc_label"),
            ecdg_code: get_field(&row, "ecdg_code"),
            ecdg_label: get_field(&row, "ecdg_label"),
            ecdg_sub: get_field(&row, "ecdg_sub"),
            ecdg_sub_label: get_field(&row, "ecdg_sub_label"),
            short_code,
            term: get_field(&row, "term"),
        });
    }
    results.sort_by(|a, b| a.short_code.cmp(&b.short_code));
    Ok(results)
}

pub fn load_intercepts(path: &Path) -> Result<Vec<InterceptRow>, StandardsError> {
    let (headers, rows) = read_csv_rows(path)?;
    require_columns(
        path,
        &headers,
        &["ecdg_code", "ecdg_sub", "intercept", "intercept_sub"],
    )?;

    let mut results = Vec::new();
    for row in rows {
        let ecdg_code = get_field(&row, "ecdg_code");
        if ecdg_code.is_empty() {
            continue;
        }
        results.push(InterceptRow {
            ecdg_code,
            ecdg_sub: get_field(&row, "ecdg_sub"),
            intercept: parse_number(path, "intercept", &get_field(&row, "intercept"))?,
            intercept_sub: parse_number(path, "intercept_sub", &get_field(&row, "intercept_sub"))?,
        });
    }
    Ok(results)
}

pub fn load_triage_coefficients(
    path: &Path,
) -> Result<Vec<(String, TriageCoefficientRow)>, StandardsError> {
    const COLUMNS: &[&str] = &[
        "ecdg_code",
        "admitted",
        "died_in_ed",
        "left_at_own_risk",
        "referred",
        "arrival_by_ambulance",
        "triage_category1",
        "triage_category2",
        "triage_category3",
        "triage_category4",
    ];
    let (headers, rows) = read_csv_rows(path)?;
    require_columns(path, &headers, COLUMNS)?;

    let mut results = Vec::new();
    for row in rows {
        let ecdg_code = get_field(&row, "ecdg_code");
        if ecdg_code.is_empty() {
            continue;
        }
        let number = |column: &str| parse_number(path, column, &get_field(&row, column));
        results.push((
            ecdg_code,
            TriageCoefficientRow {
                admitted: number("admitted")?,
                died_in_ed: number("died_in_ed")?,
                left_at_own_risk: number("left_at_own_risk")?,
                referred: number("referred")?,
                arrival_by_ambulance: number("arrival_by_ambulance")?,
                triage_category1: number("triage_category1")?,
                triage_category2: number("triage_category2")?,
                triage_category3: number("triage_category3")?,
                triage_category4: number("triage_category4")?,
            },
        ));
    }
    Ok(results)
}

pub fn load_age_coefficients(
    path: &Path,
) -> Result<Vec<(String, AgeCoefficientRow)>, StandardsError> {
    const COLUMNS: &[&str] = &[
        "ecdg_code",
        "agegroup59",
        "agegroup1014",
        "agegroup1569",
        "agegroup7074",
        "agegroup7579",
        "agegroup8084",
        "agegroup85",
    ];
    let (headers, rows) = read_csv_rows(path)?;
    require_columns(path, &headers, COLUMNS)?;

    let mut results = Vec::new();
    for row in rows {
        let ecdg_code = get_field(&row, "ecdg_code");
        if ecdg_code.is_empty() {
            continue;
        }
        let number = |column: &str| parse_number(path, column, &get_field(&row, column));
        results.push((
            ecdg_code,
            AgeCoefficientRow {
                age_5_9: number("agegroup59")?,
                age_10_14: number("agegroup1014")?,
                age_15_69: number("agegroup1569")?,
                age_70_74: number("agegroup7074")?,
                age_75_79: number("agegroup7579")?,
                age_80_84: number("agegroup8084")?,
                age_85_plus: number("agegroup85")?,
            },
        ));
    }
    Ok(results)
}

pub fn load_interactions(path: &Path) -> Result<Vec<(String, InteractionRow)>, StandardsError> {
    const COLUMNS: &[&str] = &[
        "ecdg_code",
        "agegroup04",
        "agegroup59",
        "agegroup1014",
        "agegroup8084",
        "agegroup85",
        "triage_category1",
        "triage_category2",
        "triage_category3",
        "triage_category4",
    ];
    let (headers, rows) = read_csv_rows(path)?;
    require_columns(path, &headers, COLUMNS)?;

    let mut results = Vec::new();
    for row in rows {
        let ecdg_code = get_field(&row, "ecdg_code");
        if ecdg_code.is_empty() {
            continue;
        }
        let number = |column: &str| parse_number(path, column, &get_field(&row, column));
        results.push((
            ecdg_code,
            InteractionRow {
                age_0_4: number("agegroup04")?,
                age_5_9: number("agegroup59")?,
                age_10_14: number("agegroup1014")?,
                age_80_84: number("agegroup8084")?,
                age_85_plus: number("agegroup85")?,
                triage_category1: number("triage_category1")?,
                triage_category2: number("triage_category2")?,
                triage_category3: number("triage_category3")?,
                triage_category4: number("triage_category4")?,
            },
        ));
    }
    Ok(results)
}

pub fn load_thresholds(path: &Path) -> Result<Vec<ThresholdTableRow>, StandardsError> {
    let (headers, rows) = read_csv_rows(path)?;
    require_columns(path, &headers, &["ecdg_code", "aecc_class", "min", "max"])?;

    let mut results = Vec::new();
    for row in rows {
        let ecdg_code = get_field(&row, "ecdg_code");
        if ecdg_code.is_empty() {
            continue;
        }
        results.push(ThresholdTableRow {
            ecdg_code,
            label: get_field(&row, "label"),
            class_code: get_field(&row, "aecc_class"),
            min: parse_number(path, "min", &get_field(&row, "min"))?,
            max: parse_number(path, "max", &get_field(&row, "max"))?,
        });
    }
    Ok(results)
}
