//! Plugdocs Core Library
//!
//! Core domain logic for the plugdocs documentation and skill tooling:
//! catalog and index loading, path/content relevance scoring, and skill
//! frontmatter validation.

pub mod catalog;
pub mod docs;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod search;
pub mod skill;
