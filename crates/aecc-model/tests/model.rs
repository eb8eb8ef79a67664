//! Tests for aecc-model types.

use aecc_model::{
    AgeBracket, EpisodeInput, GroupingResult, ThresholdRow, codes::VALID_EPISODE_END_STATUSES,
};

#[test]
fn result_serializes() {
    let input = EpisodeInput {
        episode_number: "EP1".to_string(),
        triage_category: "4".to_string(),
        episode_end_status: "1".to_string(),
        visit_type: "1".to_string(),
        age_years: "66".to_string(),
        transport_mode: "1".to_string(),
        principal_diagnosis: "F0300".to_string(),
        service_date: "30/06/2022".to_string(),
    };
    let mut result = GroupingResult::from_input(&input);
    result.ecdg = "E0110".to_string();
    result.ecdg_subgroup = "E0111".to_string();
    result.end_class = "E0110B".to_string();
    result.complexity_score = 4.5;

    let json = serde_json::to_string(&result).expect("serialize result");
    let round: GroupingResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
    assert!(round.is_classified());
}

#[test]
fn threshold_row_round_trips_with_finite_bounds() {
    let row = ThresholdRow {
        label: "Complexity level B".to_string(),
        class_code: "E0110B".to_string(),
        min: 0.0,
        max: 6.0,
    };
    let json = serde_json::to_string(&row).expect("serialize row");
    let round: ThresholdRow = serde_json::from_str(&json).expect("deserialize row");
    assert_eq!(round, row);
}

#[test]
fn recognized_sets_match_the_manual() {
    assert_eq!(VALID_EPISODE_END_STATUSES, &["1", "2", "3", "5", "6"]);
    assert_eq!(AgeBracket::Age85Plus.as_str(), "85+");
}
