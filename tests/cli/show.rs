use crate::cli::support::{init_store, juryboard};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_human_sections() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jury panel"))
        .stdout(predicate::str::contains("Score entry (0-2)"))
        .stdout(predicate::str::contains("Preview (as on screen)"))
        .stdout(predicate::str::contains("Criterion 5"));
}

#[test]
fn test_show_records() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 4", "Criterion 1", "2"])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .args(["--format", "records", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H juryboard=1 view=jury teams=7 criteria=5"))
        .stdout(predicate::str::contains(
            "C team=\"Team 4\" criterion=\"Criterion 1\" value=2",
        ))
        .stdout(predicate::str::contains("T rank=1 team=\"Team 4\" total=2"));
}

#[test]
fn test_show_finds_store_from_subdirectory() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let nested = dir.path().join("slides/day1");
    std::fs::create_dir_all(&nested).unwrap();

    juryboard()
        .current_dir(&nested)
        .arg("show")
        .assert()
        .success();
}

#[test]
fn test_show_kk_ru_labels() {
    let dir = tempdir().unwrap();

    juryboard()
        .current_dir(dir.path())
        .args(["init", "--language", "kk-ru"])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(" / "));
}
