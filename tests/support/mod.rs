use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for plugdocs
pub fn plugdocs() -> Command {
    cargo_bin_cmd!("plugdocs")
}

/// Write a docs root fixture: manifest, two markdown topics, and a
/// content index with one entry.
#[allow(dead_code)]
pub fn write_docs_fixture(root: &Path) {
    fs::write(
        root.join("paths_manifest.json"),
        r#"{
            "categories": {
                "guides": ["/docs/en/hooks", "/docs/en/hooks-guide"],
                "reference": ["/docs/en/cli-reference"]
            },
            "metadata": {"total_paths": 3}
        }"#,
    )
    .unwrap();

    let docs = root.join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("hooks.md"), "# Hooks\n\nHook configuration.\n").unwrap();
    fs::write(docs.join("mcp.md"), "# MCP Setup\n\nProtocol setup.\n").unwrap();

    fs::write(
        docs.join(".search_index.json"),
        r#"{
            "index": {
                "/docs/en/mcp": {
                    "title": "MCP Setup",
                    "keywords": ["mcp", "config"],
                    "content_preview": "Model Context Protocol...",
                    "file_path": "docs/mcp.md"
                }
            },
            "indexed_files": 1
        }"#,
    )
    .unwrap();
}

/// Create a skill directory with the given frontmatter block
#[allow(dead_code)]
pub fn write_skill(parent: &Path, dir_name: &str, frontmatter: &str) -> PathBuf {
    let skill_dir = parent.join(dir_name);
    fs::create_dir_all(&skill_dir).unwrap();
    fs::write(
        skill_dir.join("SKILL.md"),
        format!("---\n{}---\n\n# Instructions\n", frontmatter),
    )
    .unwrap();
    skill_dir
}
