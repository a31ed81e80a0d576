use crate::cli::support::{init_store, juryboard};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn store_with_pin(pin: &str) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let config_path = dir.path().join(".juryboard/config.toml");
    let mut config = fs::read_to_string(&config_path).unwrap();
    config.push_str(&format!("admin_pin = \"{}\"\n", pin));
    fs::write(&config_path, config).unwrap();
    dir
}

#[test]
fn test_score_without_pin_is_refused() {
    let dir = store_with_pin("4321");

    juryboard()
        .current_dir(dir.path())
        .args(["score", "Team 1", "Criterion 1", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("admin PIN required"));
}

#[test]
fn test_wrong_pin_is_refused() {
    let dir = store_with_pin("4321");

    juryboard()
        .current_dir(dir.path())
        .args(["--pin", "0000", "reset"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("wrong admin PIN"));
}

#[test]
fn test_pin_from_flag_and_env() {
    let dir = store_with_pin("4321");

    juryboard()
        .current_dir(dir.path())
        .args(["--pin", "4321", "score", "Team 1", "Criterion 1", "1"])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .env("JURYBOARD_PIN", "4321")
        .args(["score", "Team 1", "Criterion 2", "1"])
        .assert()
        .success();
}

#[test]
fn test_read_only_commands_need_no_pin() {
    let dir = store_with_pin("4321");

    for args in [
        vec!["show"],
        vec!["board"],
        vec!["draw", "show"],
        vec!["export", "--to", "out.csv"],
    ] {
        juryboard()
            .current_dir(dir.path())
            .args(args)
            .assert()
            .success();
    }
}

#[test]
fn test_admin_pin_from_environment() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .env("JURYBOARD_ADMIN_PIN", "9999")
        .args(["draw", "commit"])
        .assert()
        .code(4);

    juryboard()
        .current_dir(dir.path())
        .env("JURYBOARD_ADMIN_PIN", "9999")
        .env("JURYBOARD_PIN", "9999")
        .args(["draw", "commit"])
        .assert()
        .success();
}

#[test]
fn test_blank_admin_pin_env_keeps_configured_pin() {
    let dir = store_with_pin("4321");

    juryboard()
        .current_dir(dir.path())
        .env("JURYBOARD_ADMIN_PIN", "")
        .arg("reset")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("admin PIN required"));

    juryboard()
        .current_dir(dir.path())
        .env("JURYBOARD_ADMIN_PIN", "  ")
        .args(["--pin", "4321", "reset"])
        .assert()
        .success();
}
