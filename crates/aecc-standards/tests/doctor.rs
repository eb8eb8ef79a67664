//! Reference pack diagnostics tests.

use aecc_standards::tables::{InterceptRow, ReferenceTables, ThresholdTableRow};
use aecc_standards::{TableCounts, check_tables};
use insta::assert_snapshot;

fn threshold(ecdg: &str, class_code: &str, min: f64, max: f64) -> ThresholdTableRow {
    ThresholdTableRow {
        ecdg_code: ecdg.to_string(),
        label: format!("Complexity level {}", &class_code[class_code.len() - 1..]),
        class_code: class_code.to_string(),
        min,
        max,
    }
}

#[test]
fn clean_partition_has_no_issues() {
    let tables = ReferenceTables {
        thresholds: vec![
            threshold("E0110", "E0110B", 0.0, 6.4),
            threshold("E0110", "E0110A", 6.4, f64::INFINITY),
            threshold("E0710", "E0710Z", 0.0, f64::INFINITY),
        ],
        ..ReferenceTables::default()
    };
    assert!(check_tables(&tables).is_empty());
}

#[test]
fn overlapping_bands_are_reported() {
    let tables = ReferenceTables {
        thresholds: vec![
            threshold("E0110", "E0110B", 0.0, 6.0),
            threshold("E0110", "E0110A", 5.0, f64::INFINITY),
        ],
        ..ReferenceTables::default()
    };
    let issues = check_tables(&tables);
    assert_eq!(issues.len(), 1);
    assert_snapshot!(
        issues[0].to_string(),
        @"complexity_score_thresholds: E0110: bands E0110B and E0110A overlap between 5 and 6"
    );
}

#[test]
fn gaps_and_inverted_bands_are_reported() {
    let tables = ReferenceTables {
        thresholds: vec![
            threshold("E0110", "E0110B", 0.0, 4.0),
            threshold("E0110", "E0110A", 5.0, f64::INFINITY),
            threshold("E0520", "E0520Z", 3.0, 3.0),
        ],
        ..ReferenceTables::default()
    };
    let issues = check_tables(&tables);
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().any(|i| i.message.contains("gap")));
    assert!(issues.iter().any(|i| i.message.contains("empty or inverted")));
}

#[test]
fn duplicate_rows_are_reported_once() {
    let tables = ReferenceTables {
        intercepts: vec![
            InterceptRow {
                ecdg_code: "E0110".to_string(),
                ecdg_sub: "E0111".to_string(),
                intercept: 6.1,
                intercept_sub: 0.2,
            },
            InterceptRow {
                ecdg_code: "E0110".to_string(),
                ecdg_sub: "E0111".to_string(),
                intercept: 6.2,
                intercept_sub: 0.3,
            },
        ],
        ..ReferenceTables::default()
    };
    let issues = check_tables(&tables);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].ecdg, "E0110");
    assert!(issues[0].message.contains("duplicate intercept row"));
}

#[test]
fn non_finite_coefficients_are_reported() {
    let tables = ReferenceTables {
        intercepts: vec![InterceptRow {
            ecdg_code: "E0110".to_string(),
            ecdg_sub: "E0111".to_string(),
            intercept: f64::NAN,
            intercept_sub: 0.2,
        }],
        ..ReferenceTables::default()
    };
    let issues = check_tables(&tables);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("non-finite intercept"));
}

#[test]
fn counts_summarize_the_pack() {
    let tables = ReferenceTables {
        thresholds: vec![
            threshold("E0110", "E0110B", 0.0, 6.4),
            threshold("E0110", "E0110A", 6.4, f64::INFINITY),
        ],
        ..ReferenceTables::default()
    };
    let counts = TableCounts::from_tables(&tables);
    assert_eq!(counts.threshold_rows, 2);
    assert_eq!(counts.diagnosis_codes, 0);
}
