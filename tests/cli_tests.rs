//! Integration tests for the plugdocs documentation commands

mod support;

use predicates::prelude::*;
use support::{plugdocs, write_docs_fixture};
use tempfile::tempdir;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    plugdocs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: plugdocs"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_version_flag() {
    plugdocs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugdocs"));
}

// ============================================================================
// search (fuzzy path search)
// ============================================================================

#[test]
fn test_search_finds_paths() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["search", "hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/docs/en/hooks"))
        .stdout(predicate::str::contains("/docs/en/hooks-guide"));
}

#[test]
fn test_search_exact_match_ranks_first() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    let output = plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "search", "/docs/en/hooks"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["path"], "/docs/en/hooks");
    assert_eq!(results[0]["score"], 100.0);
    assert_eq!(results[1]["path"], "/docs/en/hooks-guide");
    assert_eq!(results[1]["score"], 80.0);
}

#[test]
fn test_search_no_results_suggests_alternatives() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["search", "hoks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"))
        .stdout(predicate::str::contains("Did you mean:"))
        .stdout(predicate::str::contains("/docs/en/hooks"));
}

#[test]
fn test_search_missing_manifest_is_empty_not_error() {
    let dir = tempdir().unwrap();

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["search", "hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_limit() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    let output = plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "search", "hooks", "--limit", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total_results"], 1);
}

#[test]
fn test_search_json_carries_category_label() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    let output = plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "search", "cli-reference"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["category"], "reference");
    assert_eq!(results[0]["label"], "Reference");
}

// ============================================================================
// search-content (full-text search)
// ============================================================================

#[test]
fn test_search_content_scores_title_and_keywords() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    let output = plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "search-content", "mcp"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total_results"], 1);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["path"], "/docs/en/mcp");
    // 100 title + 10 keyword intersection + 5 per-word keyword bonus
    assert_eq!(results[0]["score"], 115);
}

#[test]
fn test_search_content_no_matches_is_empty() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    let output = plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "search-content", "zzz-nothing"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total_results"], 0);
}

#[test]
fn test_search_content_missing_index_fails() {
    let dir = tempdir().unwrap();
    // Docs root exists, but no index was built
    std::fs::create_dir_all(dir.path().join("docs")).unwrap();

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["search-content", "mcp"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("search index not available"));
}

#[test]
fn test_search_content_missing_index_json_error() {
    let dir = tempdir().unwrap();

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "search-content", "mcp"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"index_not_available\""));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_topics() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available documentation files (2)"))
        .stdout(predicate::str::contains("hooks"))
        .stdout(predicate::str::contains("mcp"));
}

#[test]
fn test_list_missing_docs_dir_fails() {
    let dir = tempdir().unwrap();

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("documentation directory not found"));
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    let output = plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .args(["--format", "json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["topics"][0], "hooks");
}

// ============================================================================
// status
// ============================================================================

#[test]
fn test_status_installed() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed: Yes"))
        .stdout(predicate::str::contains("Documentation files: 2"))
        .stdout(predicate::str::contains("Manifest paths: 3"))
        .stdout(predicate::str::contains("Guides: 2 paths"))
        .stdout(predicate::str::contains("Search index: 1 files indexed"));
}

#[test]
fn test_status_missing_root_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent");

    plugdocs()
        .env("PLUGDOCS_PATH", &missing)
        .arg("status")
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("Installed: No"));
}

#[test]
fn test_status_index_not_built() {
    let dir = tempdir().unwrap();
    write_docs_fixture(dir.path());
    std::fs::remove_file(dir.path().join("docs").join(".search_index.json")).unwrap();

    plugdocs()
        .env("PLUGDOCS_PATH", dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search index: not built"));
}

#[test]
fn test_root_flag_overrides_env() {
    let good = tempdir().unwrap();
    write_docs_fixture(good.path());
    let bad = tempdir().unwrap();

    plugdocs()
        .env("PLUGDOCS_PATH", bad.path().join("absent"))
        .arg("--root")
        .arg(good.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed: Yes"));
}
