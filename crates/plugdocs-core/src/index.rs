//! Content search index loading
//!
//! The index is built by an external process and stored as JSON under the
//! docs directory. Each entry carries the title, extracted keywords, and a
//! content preview used for full-text relevance scoring.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Index file name under the docs directory
pub const SEARCH_INDEX_FILE: &str = ".search_index.json";

/// One indexed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocEntry {
    /// Document title
    #[serde(default)]
    pub title: String,
    /// Extracted keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Leading slice of the document body
    #[serde(default)]
    pub content_preview: String,
    /// Path to the backing markdown file
    #[serde(default)]
    pub file_path: String,
}

/// Full-text search index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Documentation path -> indexed document
    #[serde(default)]
    pub index: IndexMap<String, DocEntry>,
    /// Number of files the external indexer processed
    #[serde(default)]
    pub indexed_files: usize,
}

impl SearchIndex {
    /// Load the search index. Returns `None` when the file is missing or
    /// unreadable; callers must surface that as "index not available"
    /// rather than an empty result set.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "index_unreadable");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "index_malformed");
                None
            }
        }
    }
}
