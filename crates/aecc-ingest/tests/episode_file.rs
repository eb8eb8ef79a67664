//! Episode extract round-trip tests.

use aecc_ingest::{EpisodeRecord, read_episode_file, write_episode_file};
use aecc_model::GroupingResult;

#[test]
fn reads_an_extract_without_result_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("episodes.csv");
    std::fs::write(
        &path,
        "stateid,edtriag,eddepst,edvisit,ageyears,transmode,x11ddx1,servdate\n\
         A2070005371552,4,1,1,66,1,F0300,30/06/2022\n\
         A2070005372002,2,1,1,18,8,F03,30/06/2022\n",
    )
    .expect("write fixture");

    let records = read_episode_file(&path).expect("read extract");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].stateid, "A2070005371552");
    assert_eq!(records[0].x11ddx1, "F0300");
    assert_eq!(records[0].aecc_end_class, "");
    assert_eq!(records[0].complexity_score, 0.0);

    let input = records[1].to_input();
    assert_eq!(input.episode_number, "A2070005372002");
    assert_eq!(input.triage_category, "2");
    assert_eq!(input.service_date, "30/06/2022");
}

#[test]
fn graded_output_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("graded.csv");

    let mut record = EpisodeRecord {
        stateid: "A2070005371552".to_string(),
        edtriag: "4".to_string(),
        eddepst: "1".to_string(),
        edvisit: "1".to_string(),
        ageyears: "66".to_string(),
        transmode: "1".to_string(),
        x11ddx1: "F0300".to_string(),
        servdate: "30/06/2022".to_string(),
        ..EpisodeRecord::default()
    };
    let result = GroupingResult {
        ecdg_subgroup: "E0111".to_string(),
        complexity_score: 4.493848272850942,
        end_class: "E0110B".to_string(),
        ..GroupingResult::default()
    };
    record.apply_result(&result);

    write_episode_file(&path, std::slice::from_ref(&record)).expect("write graded");
    let round = read_episode_file(&path).expect("re-read graded");
    assert_eq!(round, vec![record]);
    assert_eq!(round[0].ecdg_subgroup, "E0111");
    assert_eq!(round[0].complexity_score, 4.493848272850942);
    assert_eq!(round[0].aecc_end_class, "E0110B");
}

#[test]
fn missing_extract_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.csv");
    let error = read_episode_file(&missing).expect_err("missing file");
    assert!(error.to_string().contains("nope.csv"));
}
