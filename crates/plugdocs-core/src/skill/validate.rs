//! Skill frontmatter validation
//!
//! Two phases: structural parsing fails fast with a single error, then
//! content rules accumulate every violation so one run reports all
//! problems. Field limits and the allow-list are fixed tables.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use unicode_normalization::UnicodeNormalization;

use crate::skill::frontmatter::{find_skill_file, parse_frontmatter, stringify_value};

/// Maximum skill name length in characters
pub const MAX_NAME_LENGTH: usize = 64;
/// Maximum description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
/// Maximum compatibility length in characters
pub const MAX_COMPATIBILITY_LENGTH: usize = 500;

/// Fields allowed in skill frontmatter
pub const ALLOWED_FIELDS: [&str; 6] = [
    "name",
    "description",
    "license",
    "allowed-tools",
    "metadata",
    "compatibility",
];

/// Validate a skill directory, returning ALL errors found.
/// An empty list means the skill is valid.
pub fn validate(skill_path: &Path) -> Vec<String> {
    if !skill_path.exists() {
        return vec![format!("Path does not exist: {}", skill_path.display())];
    }

    if !skill_path.is_dir() {
        return vec![format!("Not a directory: {}", skill_path.display())];
    }

    let Some(skill_file) = find_skill_file(skill_path) else {
        return vec!["Missing required file: SKILL.md".to_string()];
    };

    let content = match fs::read_to_string(&skill_file) {
        Ok(content) => content,
        Err(e) => return vec![format!("Failed to read {}: {}", skill_file.display(), e)],
    };

    let metadata = match parse_frontmatter(&content, &skill_file) {
        Ok((metadata, _body)) => metadata,
        Err(e) => return vec![e.to_string()],
    };

    let mut errors = Vec::new();

    errors.extend(validate_allowed_fields(&metadata));

    match metadata.get("name") {
        None => errors.push("Missing required field in frontmatter: name".to_string()),
        Some(name) => errors.extend(validate_name(name, Some(skill_path))),
    }

    match metadata.get("description") {
        None => errors.push("Missing required field in frontmatter: description".to_string()),
        Some(description) => errors.extend(validate_description(description)),
    }

    if let Some(compatibility) = metadata.get("compatibility") {
        errors.extend(validate_compatibility(compatibility));
    }

    errors
}

/// Check that only allowed fields are present. Offenders are reported in
/// one aggregate error, sorted.
fn validate_allowed_fields(metadata: &Mapping) -> Vec<String> {
    let mut extra: Vec<String> = metadata
        .keys()
        .map(stringify_value)
        .filter(|key| !ALLOWED_FIELDS.contains(&key.as_str()))
        .collect();

    if extra.is_empty() {
        return Vec::new();
    }

    extra.sort();
    let mut allowed = ALLOWED_FIELDS;
    allowed.sort_unstable();
    vec![format!(
        "Unexpected fields in frontmatter: {}. Only {} are allowed.",
        extra.join(", "),
        allowed.join(", ")
    )]
}

/// Validate skill name format and directory match.
///
/// Names support Unicode letters and digits plus hyphens; both the name
/// and the directory name are NFKC-normalized before comparison so
/// visually identical spellings cannot mismatch.
fn validate_name(name: &Value, skill_dir: Option<&Path>) -> Vec<String> {
    let Some(raw) = name.as_str().map(str::trim).filter(|s| !s.is_empty()) else {
        return vec!["Field 'name' must be a non-empty string".to_string()];
    };

    let name: String = raw.nfkc().collect();
    let mut errors = Vec::new();

    let char_count = name.chars().count();
    if char_count > MAX_NAME_LENGTH {
        errors.push(format!(
            "Skill name '{}' exceeds {} character limit ({} chars)",
            name, MAX_NAME_LENGTH, char_count
        ));
    }

    if name != name.to_lowercase() {
        errors.push(format!("Skill name '{}' must be lowercase", name));
    }

    if name.starts_with('-') || name.ends_with('-') {
        errors.push("Skill name cannot start or end with a hyphen".to_string());
    }

    if name.contains("--") {
        errors.push("Skill name cannot contain consecutive hyphens".to_string());
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        errors.push(format!(
            "Skill name '{}' contains invalid characters. Only letters, digits, and hyphens are allowed.",
            name
        ));
    }

    if let Some(dir) = skill_dir {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let normalized_dir: String = dir_name.nfkc().collect();
        if normalized_dir != name {
            errors.push(format!(
                "Directory name '{}' must match skill name '{}'",
                dir_name, name
            ));
        }
    }

    errors
}

fn validate_description(description: &Value) -> Vec<String> {
    let Some(text) = description
        .as_str()
        .filter(|s| !s.trim().is_empty())
    else {
        return vec!["Field 'description' must be a non-empty string".to_string()];
    };

    let char_count = text.chars().count();
    if char_count > MAX_DESCRIPTION_LENGTH {
        return vec![format!(
            "Description exceeds {} character limit ({} chars)",
            MAX_DESCRIPTION_LENGTH, char_count
        )];
    }

    Vec::new()
}

fn validate_compatibility(compatibility: &Value) -> Vec<String> {
    let Some(text) = compatibility.as_str() else {
        return vec!["Field 'compatibility' must be a string".to_string()];
    };

    let char_count = text.chars().count();
    if char_count > MAX_COMPATIBILITY_LENGTH {
        return vec![format!(
            "Compatibility exceeds {} character limit ({} chars)",
            MAX_COMPATIBILITY_LENGTH, char_count
        )];
    }

    Vec::new()
}
