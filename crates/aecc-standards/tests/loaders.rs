//! Reference pack loading tests.

use std::path::{Path, PathBuf};

use aecc_standards::{ReferenceTables, StandardsError, load_tables};

fn sample_pack_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tables")
}

fn write_pack(dir: &Path) {
    std::fs::write(
        dir.join("diagnosis_short_list_map.csv"),
        "ecc_code,ecc_label,ecdg_code,ecdg_label,ecdg_sub,ecdg_sub_label,shortlist_code,term\n\
         E011,Neurological,E0110,Delirium and dementia,E0111,Dementia,F0300,Dementia in Alzheimer disease\n\
         E011,Neurological,E0110,Delirium and dementia,E0112,Delirium,F05,Delirium\n",
    )
    .expect("write diagnosis map");
    std::fs::write(
        dir.join("ecdg_intercepts.csv"),
        "ecdg_code,ecdg_sub,intercept,intercept_sub\n\
         E0110,E0111,6.1,0.25\n\
         E0110,E0112,6.1,\n",
    )
    .expect("write intercepts");
    std::fs::write(
        dir.join("ecdg_triage_coefficients.csv"),
        "ecdg_code,admitted,died_in_ed,left_at_own_risk,referred,arrival_by_ambulance,\
         triage_category1,triage_category2,triage_category3,triage_category4\n\
         E0110,0.42,0.9,-0.2,0.31,0.18,0.52,0.35,0.2,0.08\n",
    )
    .expect("write triage coefficients");
    std::fs::write(
        dir.join("ecdg_age_coefficients.csv"),
        "ecdg_code,agegroup59,agegroup1014,agegroup1569,agegroup7074,agegroup7579,agegroup8084,agegroup85\n\
         E0110,0.05,0.04,0.11,0.21,0.25,0.3,0.36\n",
    )
    .expect("write age coefficients");
    std::fs::write(
        dir.join("ecdg_interactions.csv"),
        "ecdg_code,agegroup04,agegroup59,agegroup1014,agegroup8084,agegroup85,\
         triage_category1,triage_category2,triage_category3,triage_category4\n\
         E0110,0.02,0.01,0.01,0.06,0.09,0.12,0.1,0.05,0.02\n",
    )
    .expect("write interactions");
    std::fs::write(
        dir.join("complexity_score_thresholds.csv"),
        "ecdg_code,label,aecc_class,min,max\n\
         E0110,Complexity level A,E0110A,6.4,Infinity\n\
         E0110,Complexity level B,E0110B,0,6.4\n",
    )
    .expect("write thresholds");
}

#[test]
fn loads_a_pack_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pack(dir.path());

    let tables = load_tables(dir.path()).expect("load pack");
    assert_eq!(tables.diagnosis_map.len(), 2);
    assert_eq!(tables.diagnosis_map[0].short_code, "F0300");
    assert_eq!(tables.diagnosis_map[0].ecdg_code, "E0110");
    assert_eq!(tables.diagnosis_map[0].ecdg_sub, "E0111");

    assert_eq!(tables.intercepts.len(), 2);
    assert_eq!(tables.intercepts[0].intercept, 6.1);
    // Blank cells load as zero: no value published for that subgroup.
    assert_eq!(tables.intercepts[1].intercept_sub, 0.0);

    let (ecdg, triage) = &tables.triage_coefficients[0];
    assert_eq!(ecdg, "E0110");
    assert_eq!(triage.left_at_own_risk, -0.2);
    assert_eq!(triage.triage_category4, 0.08);

    // The top band's max is unbounded.
    assert_eq!(tables.thresholds[0].max, f64::INFINITY);
    assert_eq!(tables.thresholds[1].min, 0.0);
}

#[test]
fn missing_column_is_a_named_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pack(dir.path());
    std::fs::write(
        dir.path().join("ecdg_intercepts.csv"),
        "ecdg_code,ecdg_sub,intercept\nE0110,E0111,6.1\n",
    )
    .expect("overwrite intercepts");

    let error = load_tables(dir.path()).expect_err("truncated table");
    match error {
        StandardsError::MissingColumn { column, .. } => assert_eq!(column, "intercept_sub"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_number_is_a_named_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pack(dir.path());
    std::fs::write(
        dir.path().join("complexity_score_thresholds.csv"),
        "ecdg_code,label,aecc_class,min,max\nE0110,Level A,E0110A,zero,Infinity\n",
    )
    .expect("overwrite thresholds");

    let error = load_tables(dir.path()).expect_err("bad number");
    match error {
        StandardsError::Number { column, .. } => assert_eq!(column, "min"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sample_pack_loads_and_is_coherent() {
    let tables: ReferenceTables = load_tables(&sample_pack_root()).expect("load sample pack");
    assert!(!tables.diagnosis_map.is_empty());
    assert!(!tables.thresholds.is_empty());

    // Every mapped (ECDG, subgroup) pair has an intercept row.
    for row in &tables.diagnosis_map {
        assert!(
            tables
                .intercepts
                .iter()
                .any(|i| i.ecdg_code == row.ecdg_code && i.ecdg_sub == row.ecdg_sub),
            "no intercept for {}/{}",
            row.ecdg_code,
            row.ecdg_sub
        );
        assert!(
            tables.thresholds.iter().any(|t| t.ecdg_code == row.ecdg_code),
            "no threshold bands for {}",
            row.ecdg_code
        );
    }

    // The sample pack itself must pass its own doctor.
    assert!(aecc_standards::check_tables(&tables).is_empty());
}
