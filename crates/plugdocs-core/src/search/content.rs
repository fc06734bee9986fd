//! Full-text content scoring
//!
//! Additive integer scoring per indexed document:
//! - +100 when the query is a substring of the title
//! - +10 per query word found in the keyword set
//! - +20 when the query is a substring of the content preview
//! - +5 per query word found in the keyword set (applies on top of the
//!   +10 intersection bonus; the double count is deliberate, kept for
//!   compatibility with the reference scoring)
//!
//! Zero-score documents are dropped.

use std::collections::HashSet;

use serde::Serialize;

use crate::index::SearchIndex;

/// Keywords carried on each hit
const MAX_HIT_KEYWORDS: usize = 5;

/// One content search hit
#[derive(Debug, Clone, Serialize)]
pub struct ContentHit {
    /// Documentation path
    pub path: String,
    /// Document title
    pub title: String,
    /// Relevance score, > 0
    pub score: u32,
    /// Content preview
    pub preview: String,
    /// Backing file path
    pub file: String,
    /// First keywords of the document (at most 5)
    pub keywords: Vec<String>,
}

/// Score every indexed document against `query`, best first, at most
/// `limit`. An empty query or empty index yields no results.
pub fn score_content(query: &str, index: &SearchIndex, limit: usize) -> Vec<ContentHit> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    let query_words: HashSet<&str> = query_lower.split_whitespace().collect();

    let mut results: Vec<ContentHit> = index
        .index
        .iter()
        .filter_map(|(path, doc)| {
            let mut score = 0u32;

            if doc.title.to_lowercase().contains(&query_lower) {
                score += 100;
            }

            let keyword_set: HashSet<&str> = doc.keywords.iter().map(String::as_str).collect();
            let overlap = query_words.intersection(&keyword_set).count() as u32;
            score += overlap * 10;

            if doc.content_preview.to_lowercase().contains(&query_lower) {
                score += 20;
            }

            // Per-word keyword bonus, on top of the intersection bonus
            let word_hits = query_words
                .iter()
                .filter(|word| keyword_set.contains(**word))
                .count() as u32;
            score += word_hits * 5;

            (score > 0).then(|| ContentHit {
                path: path.clone(),
                title: if doc.title.is_empty() {
                    "Untitled".to_string()
                } else {
                    doc.title.clone()
                },
                score,
                preview: doc.content_preview.clone(),
                file: doc.file_path.clone(),
                keywords: doc.keywords.iter().take(MAX_HIT_KEYWORDS).cloned().collect(),
            })
        })
        .collect();

    // Stable sort: equal scores keep index iteration order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}
