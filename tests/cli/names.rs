use crate::cli::support::{init_store, json_stdout, juryboard};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const TEAMS: [&str; 7] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta"];

fn team_args() -> Vec<String> {
    let mut args = vec!["names".to_string()];
    for team in TEAMS {
        args.push("--team".to_string());
        args.push(team.to_string());
    }
    args
}

#[test]
fn test_names_replaces_teams() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(team_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"))
        .stdout(predicate::str::contains("Teams: Alpha, Beta"));

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["teams"][0], "Alpha");
    assert_eq!(show["teams"][6], "Eta");
    assert_eq!(show["criteria"][0], "Criterion 1");
}

#[test]
fn test_names_keeps_scores_of_unchanged_pairs() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 1", "Criterion 1", "2"])
        .assert()
        .success();
    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 2", "Criterion 1", "1"])
        .assert()
        .success();

    // Team 2 is renamed; Team 1 keeps its name
    juryboard()
        .current_dir(dir.path())
        .args([
            "names", "--team", "Team 1", "--team", "Renamed", "--team", "Team 3", "--team",
            "Team 4", "--team", "Team 5", "--team", "Team 6", "--team", "Team 7",
        ])
        .assert()
        .success();

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["scores"]["Team 1"]["Criterion 1"], 2);
    assert_eq!(show["scores"]["Renamed"]["Criterion 1"], 0);
}

#[test]
fn test_names_from_file_skips_blank_lines() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    fs::write(
        dir.path().join("criteria.txt"),
        "Idea\n\n  Demo  \nTech\nDesign\nPitch\n",
    )
    .unwrap();

    juryboard()
        .current_dir(dir.path())
        .args(["names", "--criteria-file", "criteria.txt"])
        .assert()
        .success();

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["criteria"][1], "Demo");
    assert_eq!(show["criteria"].as_array().unwrap().len(), 5);
}

#[test]
fn test_names_from_stdin() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["names", "--teams-file", "-"])
        .write_stdin(TEAMS.join("\n"))
        .assert()
        .success();

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["teams"][2], "Gamma");
}

#[test]
fn test_names_wrong_team_count() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["names", "--team", "Only", "--team", "Two"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected 7 teams, got 2"));
}

#[test]
fn test_names_duplicate_rejected() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args([
            "names", "--criterion", "A", "--criterion", "B", "--criterion", "A", "--criterion",
            "C", "--criterion", "D",
        ])
        .assert()
        .failure();

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["criteria"][0], "Criterion 1");
}

#[test]
fn test_names_requires_something() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .arg("names")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(team_args())
        .assert()
        .success();
    juryboard()
        .current_dir(dir.path())
        .args(["score", "Alpha", "Criterion 1", "2"])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset done"));

    let show = json_stdout(dir.path(), &["--format", "json", "show"]);
    assert_eq!(show["teams"][0], "Team 1");
    assert_eq!(show["standings"][0]["total"], 0);
}

#[test]
fn test_names_reject_embedded_newline() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let mut args = team_args();
    args[2] = "Alpha\nBeta".to_string();

    juryboard()
        .current_dir(dir.path())
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("control character"));

    juryboard()
        .current_dir(dir.path())
        .args(["--format", "records", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha").not());
}

#[test]
fn test_names_stdin_for_both_sides_rejected() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["names", "--teams-file", "-", "--criteria-file", "-"])
        .write_stdin(TEAMS.join("\n"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("stdin"));
}
