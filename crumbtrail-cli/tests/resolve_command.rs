//! Integration tests for `crumbtrail resolve`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_text() {
    let env = TestEnv::with_site();

    env.command()
        .args(["resolve", "/docs/getting-started/installation", "--format", "text"])
        .assert()
        .success()
        .stdout("Home > Docs > Getting Started > Installation\n");
}

#[test]
fn test_resolve_json_fields() {
    let env = TestEnv::with_site();

    let output = env
        .command()
        .args(["resolve", "/about", "--format", "json"])
        .output()
        .expect("Failed to run resolve");
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let items = items.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["to"], "/");
    assert_eq!(items[0]["label"], "Home");
    assert_eq!(items[0]["current"], false);
    assert_eq!(items[1]["to"], "/about");
    assert_eq!(items[1]["label"], "About us");
    assert_eq!(items[1]["ariaLabel"], "About us");
    assert_eq!(items[1]["current"], true);
}

#[test]
fn test_resolve_human_marks_current() {
    let env = TestEnv::with_site();

    env.command()
        .args(["resolve", "/docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* /docs"))
        .stdout(predicate::str::contains("Home"));
}

#[test]
fn test_resolve_locale_flag() {
    let env = TestEnv::with_site();

    env.command()
        .args(["resolve", "/about", "--format", "text", "--locale", "fr"])
        .assert()
        .success()
        .stdout("Accueil > À propos\n");
}

#[test]
fn test_resolve_locale_env() {
    let env = TestEnv::with_site();

    env.command()
        .env("CRUMBTRAIL_LOCALE", "fr")
        .args(["resolve", "/about", "--format", "text"])
        .assert()
        .success()
        .stdout("Accueil > À propos\n");
}

#[test]
fn test_resolve_invalid_locale_flag() {
    let env = TestEnv::with_site();

    env.command()
        .args(["resolve", "/about", "--locale", "en us"])
        .assert()
        .code(4);
}

#[test]
fn test_resolve_no_translate() {
    let env = TestEnv::with_site();

    env.command()
        .args(["resolve", "/about", "--format", "text", "--no-translate"])
        .assert()
        .success()
        .stdout("Home > About\n");
}

#[test]
fn test_resolve_root_label_for_untitled_root() {
    let env = TestEnv::new();
    env.write("crumbtrail.yaml", "routes:\n  - name: index\n    path: /\n");

    env.command()
        .args(["resolve", "/", "--format", "text", "--root-label", "Start"])
        .assert()
        .success()
        .stdout("Start\n");
}

#[test]
fn test_resolve_without_configuration() {
    let env = TestEnv::new();

    // Root unmatched: empty label, skipped in text output.
    env.command()
        .args(["resolve", "/docs/seo-utils", "--format", "text"])
        .assert()
        .success()
        .stdout("Docs > Seo Utils\n");
}

#[test]
fn test_resolve_output_format_from_config() {
    let env = TestEnv::new();
    env.write("crumbtrail.yaml", "output_format: yaml\n");

    env.command()
        .args(["resolve", "/docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ariaLabel: Docs"));
}

#[test]
fn test_resolve_local_file_overrides_project() {
    let env = TestEnv::with_site();
    env.write(
        "crumbtrail.local.yaml",
        "messages:\n  en:\n    breadcrumb:\n      items:\n        about:\n          label: Who we are\n",
    );

    env.command()
        .args(["resolve", "/about", "--format", "text"])
        .assert()
        .success()
        .stdout("Home > Who we are\n");
}
