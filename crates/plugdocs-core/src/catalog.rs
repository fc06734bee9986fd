//! Path catalog (manifest) loading and lookup
//!
//! The manifest maps category names to ordered lists of documentation
//! paths. It is written by an external mirroring process and treated as
//! read-only for the process lifetime. Category and path order follow the
//! file; tie-breaks during scoring rely on that order being preserved.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Manifest file name under the docs root
pub const MANIFEST_FILE: &str = "paths_manifest.json";

/// Parsed paths manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Category name -> ordered documentation paths.
    /// A path appears in at most one category; lookups take the first match.
    #[serde(default)]
    pub categories: IndexMap<String, Vec<String>>,
    /// Manifest metadata
    #[serde(default)]
    pub metadata: ManifestMetadata,
}

/// Metadata block of the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Total number of paths across all categories
    #[serde(default)]
    pub total_paths: usize,
    /// When the mirror was last refreshed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Manifest {
    /// Load the manifest from a file. A missing file yields an empty
    /// manifest; searches over it return no results rather than erroring.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "manifest_missing");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Iterate all documented paths in catalog order
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.categories
            .values()
            .flat_map(|paths| paths.iter().map(String::as_str))
    }

    /// Find the category a path belongs to (first match wins)
    pub fn category_for(&self, path: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, paths)| paths.iter().any(|p| p == path))
            .map(|(category, _)| category.as_str())
    }

    /// True when no category holds any path
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|paths| paths.is_empty())
    }
}

/// Map an internal category name to a user-friendly label
/// (`api_reference` -> `Api Reference`)
pub fn category_label(category: &str) -> String {
    category
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
