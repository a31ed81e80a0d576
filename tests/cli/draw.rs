use crate::cli::support::{init_store, json_stdout, juryboard};
use predicates::prelude::*;
use tempfile::tempdir;

// sha256 of the bytes "abc"
const SECRET: &str = "616263";
const COMMITMENT: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[test]
fn test_draw_commit_reveal_verify() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let commit = json_stdout(
        dir.path(),
        &["--format", "json", "draw", "commit", "--secret", SECRET],
    );
    assert_eq!(commit["status"], "committed");
    assert_eq!(commit["commitment"], COMMITMENT);
    assert!(commit.get("secret").is_none());

    let reveal = json_stdout(
        dir.path(),
        &["--format", "json", "draw", "reveal", "--secret", SECRET],
    );
    let order = reveal["order"].as_array().unwrap().clone();
    assert_eq!(order.len(), 7);

    let verify = json_stdout(
        dir.path(),
        &[
            "--format",
            "json",
            "draw",
            "verify",
            "--secret",
            SECRET,
            "--commitment",
            COMMITMENT,
        ],
    );
    assert_eq!(verify["order"].as_array().unwrap(), &order);

    let shown = json_stdout(dir.path(), &["--format", "json", "draw", "show"]);
    assert_eq!(shown["draw"]["reveal"]["order"].as_array().unwrap(), &order);
}

#[test]
fn test_draw_order_is_reproducible_across_stores() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();

    let mut orders = Vec::new();
    for dir in [&first, &second] {
        init_store(dir.path());
        json_stdout(
            dir.path(),
            &["--format", "json", "draw", "commit", "--secret", SECRET],
        );
        let reveal = json_stdout(
            dir.path(),
            &["--format", "json", "draw", "reveal", "--secret", SECRET],
        );
        orders.push(reveal["order"].clone());
    }
    assert_eq!(orders[0], orders[1]);
}

#[test]
fn test_draw_known_order() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let verify = json_stdout(
        dir.path(),
        &[
            "--format",
            "json",
            "draw",
            "verify",
            "--secret",
            SECRET,
            "--commitment",
            COMMITMENT,
        ],
    );
    assert_eq!(
        verify["order"],
        serde_json::json!(["Team 5", "Team 3", "Team 4", "Team 1", "Team 2", "Team 7", "Team 6"])
    );
}

#[test]
fn test_draw_generated_secret_is_printed() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let commit = json_stdout(dir.path(), &["--format", "json", "draw", "commit"]);
    let secret = commit["secret"].as_str().unwrap();
    assert_eq!(secret.len(), 64);

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "reveal", "--secret", secret])
        .assert()
        .success()
        .stdout(predicate::str::contains("Presentation order"));
}

#[test]
fn test_draw_reveal_wrong_secret() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "commit", "--secret", SECRET])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "reveal", "--secret", "cafe"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not match"));

    let shown = json_stdout(dir.path(), &["--format", "json", "draw", "show"]);
    assert!(shown["draw"].get("reveal").is_none());
}

#[test]
fn test_draw_reveal_without_commit() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "reveal", "--secret", SECRET])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("draw commitment not found"));
}

#[test]
fn test_draw_recommit_after_reveal_needs_force() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    for args in [
        ["draw", "commit", "--secret", SECRET],
        ["draw", "reveal", "--secret", SECRET],
    ] {
        juryboard()
            .current_dir(dir.path())
            .args(args)
            .assert()
            .success();
    }

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "commit", "--secret", "00ff"])
        .assert()
        .code(3);

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "commit", "--secret", "00ff", "--force"])
        .assert()
        .success();
}

#[test]
fn test_draw_verify_without_stored_draw_needs_commitment() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "verify", "--secret", SECRET])
        .assert()
        .code(2);

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "verify", "--secret", SECRET, "--commitment", COMMITMENT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Secret matches commitment"));
}

#[test]
fn test_reset_clears_draw() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "commit", "--secret", SECRET])
        .assert()
        .success();
    juryboard()
        .current_dir(dir.path())
        .arg("reset")
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No draw committed"));
}

#[test]
fn test_draw_show_records_and_human() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    juryboard()
        .current_dir(dir.path())
        .args(["--format", "records", "draw", "show"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "commit", "--secret", SECRET])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Commitment: {}", COMMITMENT)))
        .stdout(predicate::str::contains("Not revealed yet"));

    juryboard()
        .current_dir(dir.path())
        .args(["draw", "reveal", "--secret", SECRET])
        .assert()
        .success();

    juryboard()
        .current_dir(dir.path())
        .args(["--format", "records", "draw", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "D commitment={} revealed=true",
            COMMITMENT
        )))
        .stdout(predicate::str::contains("O slot=1 team=\"Team 5\""));
}
