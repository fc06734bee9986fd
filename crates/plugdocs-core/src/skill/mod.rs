//! Skill directory tooling
//!
//! A "skill" is a directory identified by a frontmatter-bearing
//! `SKILL.md`. This module parses the frontmatter, reads it back as typed
//! properties, and validates it against the field rules.

pub mod frontmatter;
pub mod validate;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

use crate::error::{DocsError, Result};
use frontmatter::{find_skill_file, parse_frontmatter, stringify_value};

/// Typed view of skill frontmatter, for JSON output.
/// Absent or empty fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
    #[serde(rename = "allowed-tools", skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, String>>,
}

/// Read skill properties from the frontmatter of a skill directory.
pub fn read_properties(skill_dir: &Path) -> Result<SkillProperties> {
    let skill_file = find_skill_file(skill_dir).ok_or_else(|| DocsError::SkillFileMissing {
        path: skill_dir.to_path_buf(),
    })?;

    let content = fs::read_to_string(&skill_file)?;
    let (mapping, _body) = parse_frontmatter(&content, &skill_file)?;

    // name/description are included only when non-empty, and trimmed
    let trimmed = |field: &str| {
        mapping
            .get(field)
            .map(stringify_value)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let metadata = match mapping.get("metadata") {
        Some(Value::Mapping(meta)) if !meta.is_empty() => Some(
            meta.iter()
                .map(|(k, v)| (stringify_value(k), stringify_value(v)))
                .collect(),
        ),
        _ => None,
    };

    Ok(SkillProperties {
        name: trimmed("name"),
        description: trimmed("description"),
        license: mapping.get("license").map(stringify_value),
        compatibility: mapping.get("compatibility").map(stringify_value),
        allowed_tools: mapping.get("allowed-tools").map(stringify_value),
        metadata,
    })
}
