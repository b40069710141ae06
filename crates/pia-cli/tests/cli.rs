mod common;

use common::{OutputAssertions, TestContext, NOW, REVISIONS_JSON};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_help_lists_commands() {
    let ctx = TestContext::new();
    ctx.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("revisions"))
        .stdout(predicate::str::contains("slugify"));
}

#[test]
fn test_revisions_text_output() {
    let ctx = TestContext::new();
    let file = ctx.write("revisions.json", REVISIONS_JSON);

    let output = ctx
        .command()
        .args(["revisions", "--locale", "en", "--now", NOW])
        .arg(&file)
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Revisions (English)\n\
         Today\n  #3  2024-03-15 10:00\n\
         3 days ago\n  #2  2024-03-12 09:30\n\
         January 2024\n  #1  2024-01-20 08:00\n"
    );
}

#[test]
fn test_revisions_json_keeps_group_order_and_extra_fields() {
    let ctx = TestContext::new();
    let file = ctx.write("revisions.json", REVISIONS_JSON);

    let output = ctx
        .command()
        .args(["revisions", "--locale", "fr", "--now", NOW, "--format", "json"])
        .arg(&file)
        .output()
        .unwrap();
    output.assert_success();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["locale"], "fr");
    let labels: Vec<&str> = value["groups"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(labels, vec!["Aujourd'hui", "Il y a 3 jours", "janvier 2024"]);
    assert_eq!(value["groups"]["Il y a 3 jours"][0]["note"], "draft");
}

#[test]
fn test_config_file_sets_locale_and_title() {
    let ctx = TestContext::new().with_config("locale: de\nrevisions:\n  show_title: false\n");
    let file = ctx.write("revisions.json", REVISIONS_JSON);

    let output = ctx
        .command()
        .args(["revisions", "--now", NOW])
        .arg(&file)
        .output()
        .unwrap();

    output.assert_success();
    output.assert_stdout_contains("Heute\n");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Revisions ("));
}

#[test]
fn test_missing_revisions_file_is_io_error() {
    let ctx = TestContext::new();
    let output = ctx
        .command()
        .args(["revisions", "absent.json", "--now", NOW])
        .output()
        .unwrap();

    output.assert_exit_code(3);
    output.assert_stderr_contains("absent.json");
}

#[test]
fn test_malformed_revisions_is_validation_error() {
    let ctx = TestContext::new();
    let file = ctx.write("revisions.json", r#"{"not": "a list"}"#);

    let output = ctx.command().arg("revisions").arg(&file).output().unwrap();

    output.assert_exit_code(5);
    output.assert_stderr_contains("E004");
}

#[test]
fn test_invalid_config_is_config_error() {
    let ctx = TestContext::new().with_config("revisions:\n  max_days_ago: 90\n");

    let output = ctx.command().args(["config", "show"]).output().unwrap();

    output.assert_exit_code(2);
    output.assert_stderr_contains("max_days_ago");
}

#[test]
fn test_env_override_applies() {
    let ctx = TestContext::new();

    ctx.command()
        .env("PIA_MAX_DAYS_AGO", "3")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_days_ago: 3"));
}

#[test]
fn test_slugify() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["slugify", "Été", "&", "Co"])
        .assert()
        .success()
        .stdout("ete-and-co\n");
}

#[test]
fn test_config_path_reports_explicit_file() {
    let ctx = TestContext::new().with_config("{}\n");

    ctx.command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pia.yaml"));
}
