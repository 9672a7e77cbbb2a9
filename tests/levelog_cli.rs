use assert_cmd::Command;
use predicates::{
    prelude::PredicateBooleanExt,
    str::{contains, is_match},
};
use std::fs;
use tempfile::tempdir;

fn levelog() -> Command {
    let mut cmd = Command::cargo_bin("levelog").expect("levelog binary build failed");
    cmd.env_remove("LEVELOG_LEVEL").env_remove("LEVELOG_PREFIX");
    cmd
}

#[test]
fn emit_writes_entry_with_label_and_tag() {
    levelog()
        .args(["--level", "INFO", "--label", "svc", "emit", "WARN", "disk", "almost", "full"])
        .assert()
        .success()
        .stdout(
            is_match(r"(?m)^svc \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} WARN: disk almost full$")
                .expect("regex compile"),
        );
}

#[test]
fn emit_below_threshold_writes_nothing() {
    levelog()
        .args(["--level", "WARN", "emit", "INFO", "hidden"])
        .assert()
        .success()
        .stdout(contains("hidden").not())
        .stdout(contains("internal logging set to level").not());
}

#[test]
fn confirmation_entry_appears_at_info() {
    levelog()
        .args(["--level", "INFO", "emit", "DEBUG", "hidden"])
        .assert()
        .success()
        .stdout(contains("log ").and(contains("INFO: internal logging set to level INFO")))
        .stdout(contains("DEBUG").not());
}

#[test]
fn level_and_label_come_from_environment() {
    levelog()
        .env("LEVELOG_LEVEL", "ERROR")
        .env("LEVELOG_PREFIX", "envsvc")
        .args(["emit", "--cause", "connection reset", "ERROR", "while", "syncing"])
        .assert()
        .success()
        .stdout(contains("envsvc ").and(contains("ERROR: connection reset - while syncing")));
}

#[test]
fn flag_overrides_environment_level() {
    levelog()
        .env("LEVELOG_LEVEL", "CRITICAL")
        .args(["--level", "DEBUG", "emit", "DEBUG", "verbose"])
        .assert()
        .success()
        .stdout(contains("DEBUG: verbose"));
}

#[test]
fn missing_level_configuration_fails() {
    levelog()
        .args(["emit", "INFO", "x"])
        .assert()
        .failure()
        .stderr(contains("env var `LEVELOG_LEVEL` is missing"));
}

#[test]
fn invalid_environment_level_fails() {
    levelog()
        .env("LEVELOG_LEVEL", "verbose")
        .args(["emit", "INFO", "x"])
        .assert()
        .failure()
        .stderr(contains("`verbose` is not valid"));
}

#[test]
fn lowercase_level_flag_is_rejected() {
    levelog()
        .args(["--level", "info", "emit", "INFO", "x"])
        .assert()
        .failure();
}

#[test]
fn critical_without_cause_uses_message() {
    levelog()
        .args(["--level", "CRITICAL", "emit", "CRITICAL", "out", "of", "memory"])
        .assert()
        .success()
        .stdout(contains("CRITICAL: out of memory"));
}

#[test]
fn output_file_receives_entries() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("app.log");
    fs::write(&path, "previous\n").unwrap();

    levelog()
        .args(["--level", "WARN", "--output"])
        .arg(&path)
        .args(["emit", "WARN", "to", "file"])
        .assert()
        .success()
        .stdout(contains("to file").not());

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("previous\n"));
    assert!(written.contains("WARN: to file"));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("app.log");

    levelog()
        .args(["--level", "WARN", "--output"])
        .arg(&path)
        .args(["emit", "WARN", "lost"])
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn levels_lists_operating_levels_and_marks_threshold() {
    levelog()
        .args(["--level", "WARN", "levels"])
        .assert()
        .success()
        .stdout("  DEBUG\n  INFO\n* WARN\n  ERROR\n  CRITICAL\n");
}

#[test]
fn levels_without_configuration_marks_nothing() {
    levelog()
        .arg("levels")
        .assert()
        .success()
        .stdout(contains("*").not().and(contains("  CRITICAL")));
}

#[test]
fn completions_generate_bash_script() {
    levelog()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("levelog").and(contains("emit")));
}
