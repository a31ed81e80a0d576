use crate::cli::support::{init_store, json_stdout, juryboard};
use predicates::prelude::*;
use tempfile::tempdir;

fn scored_store() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    for (team, values) in [
        ("Team 1", ["1", "1", "1", "1", "0"]),
        ("Team 2", ["2", "2", "2", "2", "2"]),
        ("Team 3", ["2", "1", "1", "0", "0"]),
        ("Team 4", ["0", "0", "1", "1", "2"]),
    ] {
        juryboard()
            .current_dir(dir.path())
            .arg("row")
            .arg(team)
            .args(values)
            .assert()
            .success();
    }
    dir
}

#[test]
fn test_board_human_sections() {
    let dir = scored_store();

    juryboard()
        .current_dir(dir.path())
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results (live)"))
        .stdout(predicate::str::contains("Average score per criterion"))
        .stdout(predicate::str::contains("Team profiles (0-2)"))
        .stdout(predicate::str::contains("Total points (descending)"))
        .stdout(predicate::str::contains("1st place: Team 2 (10)"))
        .stdout(predicate::str::contains("Only results are shown on screen"));
}

#[test]
fn test_board_json_ranking_and_tie_break() {
    let dir = scored_store();

    let board = json_stdout(dir.path(), &["--format", "json", "board"]);
    let standings = board["standings"].as_array().unwrap();
    assert_eq!(standings.len(), 7);
    assert_eq!(standings[0]["team"], "Team 2");
    // Teams 1, 3 and 4 all total 4; the last criterion decides, then the name
    assert_eq!(standings[1]["team"], "Team 4");
    assert_eq!(standings[2]["team"], "Team 1");
    assert_eq!(standings[3]["team"], "Team 3");
    assert_eq!(standings[3]["rank"], 4);

    assert_eq!(board["podium"].as_array().unwrap().len(), 3);
    assert_eq!(board["max_score"], 2);
    assert_eq!(board["averages"].as_array().unwrap().len(), 5);
}

#[test]
fn test_board_records() {
    let dir = scored_store();

    juryboard()
        .current_dir(dir.path())
        .args(["--format", "records", "board"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H juryboard=1 view=screen"))
        .stdout(predicate::str::contains("W place=1 team=\"Team 2\" total=10"));
}

#[test]
fn test_board_watch_zero_is_usage_error() {
    let dir = scored_store();

    juryboard()
        .current_dir(dir.path())
        .args(["board", "--watch", "0"])
        .assert()
        .code(2);
}
