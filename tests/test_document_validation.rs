//! Failure paths: every invalid document exits non-zero with a single
//! diagnostic on stderr and nothing on stdout.

mod common;

use common::CppBddProcess;

fn assert_fails(fixture: &str, framework: &str, code: i32, needle: &str) {
    let path = CppBddProcess::fixture(fixture);
    let output = CppBddProcess::spawn_command(&["--framework", framework, &path]);

    assert_eq!(
        output.status.code(),
        Some(code),
        "{fixture} ({framework}) should exit {code}"
    );
    assert!(
        output.stdout.is_empty(),
        "{fixture} should produce no generated text: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(needle),
        "{fixture} error should mention '{needle}': {stderr}"
    );
    assert_eq!(
        stderr.lines().filter(|l| l.starts_with("error:")).count(),
        1,
        "exactly one diagnostic expected: {stderr}"
    );
}

#[test]
fn empty_scenarios_rejected_for_both_frameworks() {
    for framework in ["gtest", "catch2", "unknown"] {
        assert_fails(
            "empty_scenarios.yaml",
            framework,
            2,
            "scenarios group is needed",
        );
    }
}

#[test]
fn missing_title_rejected() {
    assert_fails("missing_title.yaml", "gtest", 2, "title is needed");
}

#[test]
fn missing_when_rejected_despite_valid_later_scenario() {
    assert_fails("missing_when.yaml", "catch2", 2, "'when' is needed in scenario 'No action'");
}

#[test]
fn missing_scenario_name_rejected() {
    assert_fails(
        "missing_scenario_name.yaml",
        "gtest",
        2,
        "scenario name is needed (scenarios[0])",
    );
}

#[test]
fn empty_file_rejected() {
    assert_fails("empty.yaml", "catch2", 2, "empty");
}

#[test]
fn yaml_syntax_error_rejected() {
    assert_fails("bad_yaml.yaml", "catch2", 2, "parse error");
}

#[test]
fn missing_file_rejected() {
    let output = CppBddProcess::spawn_command(&["/tmp/nonexistent_cppbdd_test_file.yaml"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("file not found"));
}

#[test]
fn binary_content_rejected() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("binary.yaml");
    std::fs::write(&path, b"\x00\x01\x02\x03\xff\xfe\xfd\xfc").unwrap();

    let output = CppBddProcess::spawn_command(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn oversized_document_rejected() {
    let login = CppBddProcess::fixture("login.yaml");
    let output = CppBddProcess::spawn_with_env(&[&login], &[("CPPBDD_MAX_DOCUMENT_SIZE", "16")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("too large"));
}

#[test]
fn missing_file_argument_is_usage_error() {
    let output = CppBddProcess::spawn_command(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
