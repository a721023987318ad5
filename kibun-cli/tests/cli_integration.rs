//! Integration tests for the kibun CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kibun() -> Command {
    Command::cargo_bin("kibun").unwrap()
}

#[test]
fn test_analyze_positive_text_argument() {
    kibun()
        .arg("analyze")
        .arg("what a wonderful day")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive"));
}

#[test]
fn test_analyze_negative_text_argument() {
    kibun()
        .arg("analyze")
        .arg("this was a terrible mistake")
        .assert()
        .success()
        .stdout(predicate::str::contains("negative"));
}

#[test]
fn test_analyze_neutral_for_unknown_words() {
    kibun()
        .arg("analyze")
        .arg("zorp blarg quux")
        .assert()
        .success()
        .stdout(predicate::str::contains("neutral"));
}

#[test]
fn test_analyze_stdin() {
    kibun()
        .arg("analyze")
        .write_stdin("good\nbad\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive"))
        .stdout(predicate::str::contains("negative"));
}

#[test]
fn test_analyze_file_input() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("reviews.txt");
    fs::write(&file, "great product\nawful support\n").unwrap();

    kibun()
        .arg("analyze")
        .arg("-i")
        .arg(file.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("positive"))
        .stdout(predicate::str::contains("negative"));
}

#[test]
fn test_json_output() {
    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"positive\""))
        .stdout(predicate::str::contains("\"compound\""))
        .stdout(predicate::str::contains("\"provider\": \"local\""));
}

#[test]
fn test_unknown_provider_fails() {
    kibun()
        .arg("analyze")
        .arg("good")
        .arg("--provider")
        .arg("watson")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported provider"));
}

#[test]
fn test_history_round_trip() {
    let dir = TempDir::new().unwrap();
    let history = dir.path().join("history.jsonl");

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("--history")
        .arg(history.to_str().unwrap())
        .arg("--user")
        .arg("alice")
        .assert()
        .success();

    kibun()
        .arg("history")
        .arg("--history")
        .arg(history.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("positive"))
        .stdout(predicate::str::contains("good"));
}

#[test]
fn test_history_user_filter() {
    let dir = TempDir::new().unwrap();
    let history = dir.path().join("history.jsonl");

    for user in ["alice", "bob"] {
        kibun()
            .arg("analyze")
            .arg("fine work")
            .arg("--history")
            .arg(history.to_str().unwrap())
            .arg("--user")
            .arg(user)
            .assert()
            .success();
    }

    kibun()
        .arg("history")
        .arg("--history")
        .arg(history.to_str().unwrap())
        .arg("--user")
        .arg("bob")
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"))
        .stdout(predicate::str::contains("alice").not());
}

#[test]
fn test_history_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let history = dir.path().join("never-written.jsonl");

    kibun()
        .arg("history")
        .arg("--history")
        .arg(history.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_providers() {
    kibun()
        .arg("list")
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("local"))
        .stdout(predicate::str::contains("huggingface"));
}

#[test]
fn test_list_formats() {
    kibun()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.json");

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(out.to_str().unwrap())
        .assert()
        .success();

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("\"label\": \"positive\""));
}

#[test]
fn test_config_default_format_is_honored() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("kibun.toml");
    fs::write(
        &config,
        r#"
            [output]
            default_format = "json"
        "#,
    )
    .unwrap();

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-c")
        .arg(config.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"positive\""));
}

#[test]
fn test_format_flag_overrides_config_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("kibun.toml");
    fs::write(
        &config,
        r#"
            [output]
            default_format = "json"
        "#,
    )
    .unwrap();

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-c")
        .arg(config.to_str().unwrap())
        .arg("-f")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive\t"))
        .stdout(predicate::str::contains("\"label\"").not());
}

#[test]
fn test_config_compact_json_output() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("kibun.toml");
    fs::write(
        &config,
        r#"
            [output]
            default_format = "json"
            pretty_json = false
        "#,
    )
    .unwrap();

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-c")
        .arg(config.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\":\"positive\""));
}

#[test]
fn test_unknown_config_format_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("kibun.toml");
    fs::write(
        &config,
        r#"
            [output]
            default_format = "yaml"
        "#,
    )
    .unwrap();

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-c")
        .arg(config.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("kibun.toml");
    fs::write(
        &config,
        r#"
            [analysis]
            default_provider = "local"
            lexicon = "english"
        "#,
    )
    .unwrap();

    kibun()
        .arg("analyze")
        .arg("good")
        .arg("-c")
        .arg(config.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("positive"));
}
