//! Integration tests for the plugdocs skill commands

mod support;

use predicates::prelude::*;
use support::{plugdocs, write_skill};
use tempfile::tempdir;

// ============================================================================
// skill validate
// ============================================================================

#[test]
fn test_validate_valid_skill() {
    let dir = tempdir().unwrap();
    let skill = write_skill(
        dir.path(),
        "my-skill",
        "name: my-skill\ndescription: A valid skill\n",
    );

    plugdocs()
        .arg("skill")
        .arg("validate")
        .arg(&skill)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill is valid!"));
}

#[test]
fn test_validate_reports_every_error() {
    let dir = tempdir().unwrap();
    let skill = write_skill(
        dir.path(),
        "-a--b",
        "name: \"-a--b\"\ndescription: A valid skill\n",
    );

    plugdocs()
        .arg("skill")
        .arg("validate")
        .arg(&skill)
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("Validation failed:"))
        .stdout(predicate::str::contains(
            "cannot start or end with a hyphen",
        ))
        .stdout(predicate::str::contains("consecutive hyphens"));
}

#[test]
fn test_validate_uppercase_name() {
    let dir = tempdir().unwrap();
    let skill = write_skill(
        dir.path(),
        "My-Skill",
        "name: My-Skill\ndescription: A valid skill\n",
    );

    plugdocs()
        .arg("skill")
        .arg("validate")
        .arg(&skill)
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("must be lowercase"));
}

#[test]
fn test_validate_missing_directory() {
    let dir = tempdir().unwrap();

    plugdocs()
        .arg("skill")
        .arg("validate")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("Path does not exist"));
}

#[test]
fn test_validate_missing_skill_file() {
    let dir = tempdir().unwrap();
    let skill = dir.path().join("my-skill");
    std::fs::create_dir_all(&skill).unwrap();

    plugdocs()
        .arg("skill")
        .arg("validate")
        .arg(&skill)
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("Missing required file: SKILL.md"));
}

#[test]
fn test_validate_json_format() {
    let dir = tempdir().unwrap();
    let skill = write_skill(
        dir.path(),
        "my-skill",
        "name: my-skill\nauthor: someone\n",
    );

    let output = plugdocs()
        .arg("--format")
        .arg("json")
        .arg("skill")
        .arg("validate")
        .arg(&skill)
        .assert()
        .failure()
        .code(3)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["valid"], false);
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].as_str().unwrap().contains("Unexpected fields"));
    assert!(errors[1]
        .as_str()
        .unwrap()
        .contains("Missing required field in frontmatter: description"));
}

#[test]
fn test_validate_quiet_suppresses_success_message() {
    let dir = tempdir().unwrap();
    let skill = write_skill(
        dir.path(),
        "my-skill",
        "name: my-skill\ndescription: A valid skill\n",
    );

    plugdocs()
        .arg("--quiet")
        .arg("skill")
        .arg("validate")
        .arg(&skill)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// skill props
// ============================================================================

#[test]
fn test_props_outputs_json() {
    let dir = tempdir().unwrap();
    let skill = write_skill(
        dir.path(),
        "my-skill",
        "name: my-skill\ndescription: A valid skill\nlicense: MIT\nmetadata:\n  version: 2\n",
    );

    let output = plugdocs()
        .arg("skill")
        .arg("props")
        .arg(&skill)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["name"], "my-skill");
    assert_eq!(json["description"], "A valid skill");
    assert_eq!(json["license"], "MIT");
    assert_eq!(json["metadata"]["version"], "2");
    assert!(json.get("compatibility").is_none());
}

#[test]
fn test_props_not_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    std::fs::write(&file, "x").unwrap();

    plugdocs()
        .arg("skill")
        .arg("props")
        .arg(&file)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_props_invalid_frontmatter() {
    let dir = tempdir().unwrap();
    let skill = dir.path().join("my-skill");
    std::fs::create_dir_all(&skill).unwrap();
    std::fs::write(skill.join("SKILL.md"), "no frontmatter\n").unwrap();

    plugdocs()
        .arg("skill")
        .arg("props")
        .arg(&skill)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid frontmatter"));
}
