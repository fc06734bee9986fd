//! Skill frontmatter parsing
//!
//! A skill document starts with a `---` line, followed by a YAML mapping,
//! a closing `---`, and free-form markdown body. Parsing fails fast with a
//! single error; content rules are checked separately by the validator.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{DocsError, Result};

/// Recognized skill file names, in preference order
pub const SKILL_FILE_NAMES: [&str; 2] = ["SKILL.md", "skill.md"];

/// Locate the skill file in a directory. Prefers `SKILL.md` (uppercase)
/// but accepts `skill.md`.
pub fn find_skill_file(skill_dir: &Path) -> Option<PathBuf> {
    SKILL_FILE_NAMES
        .iter()
        .map(|name| skill_dir.join(name))
        .find(|path| path.exists())
}

/// Parse YAML frontmatter from skill file content.
///
/// Returns the raw mapping and the trimmed markdown body. A nested
/// `metadata` mapping has its keys and values coerced to strings;
/// non-string scalars are stringified, not rejected.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Mapping, String)> {
    if !content.starts_with("---") {
        return Err(DocsError::InvalidFrontmatter {
            path: path.to_path_buf(),
            reason: "must start with YAML frontmatter (---)".to_string(),
        });
    }

    // First segment is the empty text before the leading delimiter
    let mut parts = content.splitn(3, "---");
    parts.next();
    let header = parts.next().unwrap_or_default();
    let body = parts.next().ok_or_else(|| DocsError::InvalidFrontmatter {
        path: path.to_path_buf(),
        reason: "frontmatter not properly closed with ---".to_string(),
    })?;

    let value: Value =
        serde_yaml::from_str(header).map_err(|e| DocsError::InvalidFrontmatter {
            path: path.to_path_buf(),
            reason: format!("invalid YAML in frontmatter: {}", e),
        })?;

    let Value::Mapping(mut mapping) = value else {
        return Err(DocsError::InvalidFrontmatter {
            path: path.to_path_buf(),
            reason: "frontmatter must be a YAML mapping".to_string(),
        });
    };

    let coerced = match mapping.get("metadata") {
        Some(Value::Mapping(meta)) => Some(
            meta.iter()
                .map(|(k, v)| {
                    (
                        Value::String(stringify_value(k)),
                        Value::String(stringify_value(v)),
                    )
                })
                .collect::<Mapping>(),
        ),
        _ => None,
    };
    if let Some(coerced) = coerced {
        mapping.insert(Value::String("metadata".to_string()), Value::Mapping(coerced));
    }

    Ok((mapping, body.trim().to_string()))
}

/// Render a YAML value as a plain string
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
