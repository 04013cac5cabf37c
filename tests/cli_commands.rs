mod common;

use common::TestContext;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn generate_rejects_missing_pain_point() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-d", "healthcare", "-p", "Nurse", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in both the Persona and Pain Point fields."))
        .stdout(predicate::str::contains("Generated").not());
}

#[test]
#[serial]
fn generate_rejects_empty_persona() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-d", "retail", "-p", "", "-k", "returns", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in both"));
}

#[test]
#[serial]
fn generate_rejects_unknown_domain() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-d", "energy", "-p", "Operator", "-k", "outages", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid domain 'energy'"));
}

#[test]
#[serial]
fn generate_defaults_to_first_domain_without_input() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-p", "Hospital Administrator", "-k", "manual data entry", "--no-input"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Agentic AI for automated patient intake, gathering symptoms, and scheduling appointments.",
        ));
}

#[test]
#[serial]
fn generate_writes_explicit_export_paths() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-d", "Healthcare", "-p", "Doctor", "-k", "charting", "--no-input"])
        .args(["--json", "report.json", "--markdown", "docs/report.md"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&ctx.read("report.json")).unwrap();
    assert_eq!(json["domain"], "Healthcare");
    assert!(ctx.read("docs/report.md").contains("**Persona:** Doctor  \n"));
    assert!(!ctx.work_dir().join("agentic_use_cases.json").exists());
}

#[test]
#[serial]
fn prompt_preview_conflicts_with_exports() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-d", "retail", "-p", "a", "-k", "b", "--prompt-preview"])
        .args(["--json", "out.json"])
        .assert()
        .failure();
}

#[test]
#[serial]
fn agents_lists_catalog() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("agents")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assistants:"))
        .stdout(predicate::str::contains("Research Agents:"))
        .stdout(predicate::str::contains("Fraud Pattern Researcher"));
}

#[test]
#[serial]
fn domains_lists_supported_verticals() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("domains")
        .assert()
        .success()
        .stdout(predicate::eq("Healthcare\nRetail\nBanking\n"));
}
