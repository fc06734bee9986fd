//! Relevance scoring for documentation search
//!
//! Two independent scorers: fuzzy path matching over the catalog
//! ([`paths`]) and full-text relevance over the prebuilt content index
//! ([`content`]). Both are pure functions over already-loaded data.

pub mod content;
pub mod paths;

/// Default number of results returned by either scorer
pub const DEFAULT_LIMIT: usize = 20;
