use crate::cli::support::{init_store, json_stdout, juryboard};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Score entry tests
// ============================================================================

#[test]
fn test_score_sets_cell() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 3", "Criterion 2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team 3 / Criterion 2 = 1 (total 1)"));

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["scores"]["Team 3"]["Criterion 2"], 1);
    assert_eq!(show["standings"][0]["team"], "Team 3");
}

#[test]
fn test_score_json_reports_total() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 1", "Criterion 1", "2"])
        .assert()
        .success();
    let output = json_stdout(
        dir.path(),
        &["--format", "json", "score", "Team 1", "Criterion 5", "1"],
    );
    assert_eq!(output["status"], "ok");
    assert_eq!(output["total"], 3);
    assert!(output["updated_at"].is_string());
}

#[test]
fn test_score_out_of_range() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 1", "Criterion 1", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_score_respects_configured_max() {
    let dir = tempdir().unwrap();

    juryboard()
        .current_dir(dir.path())
        .args(["init", "--max-score", "5"])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 1", "Criterion 1", "5"])
        .assert()
        .success();
}

#[test]
fn test_score_unknown_team() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 99", "Criterion 1", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("team not found"));
}

#[test]
fn test_row_sets_all_criteria() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["row", "Team 2", "2", "1", "0", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 6"));

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["standings"][0]["team"], "Team 2");
    assert_eq!(show["standings"][0]["total"], 6);
}

#[test]
fn test_row_wrong_count_changes_nothing() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["row", "Team 2", "2", "1"])
        .assert()
        .code(2);

    juryboard()
        .current_dir(dir.path())
        .args(["row", "Team 2", "2", "2", "2", "2", "9"])
        .assert()
        .code(2);

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["scores"]["Team 2"]["Criterion 1"], 0);
}
