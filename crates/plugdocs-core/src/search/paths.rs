//! Fuzzy path scoring
//!
//! Ranks cataloged documentation paths against a free-text query with a
//! fixed weight ladder (comparisons are case-insensitive):
//! - 100: exact match
//! - 80: path starts with the query
//! - 70: query matches within the final path segment
//! - 60: query is a substring elsewhere in the path
//! - 40 x (matched / total query tokens): token overlap
//! - similarity x 30: positional character similarity, when > 0.3
//!
//! Zero-score paths are dropped. Ties keep catalog iteration order (the
//! sort is stable and the catalog preserves file order).

use std::cmp::Ordering;

use crate::catalog::Manifest;

/// Similarity cutoff below which the positional fallback contributes nothing
const SIMILARITY_CUTOFF: f64 = 0.3;

/// A path with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPath {
    /// Documentation path
    pub path: String,
    /// Relevance score, > 0
    pub score: f64,
}

/// Score all cataloged paths against `query`, best first, at most `limit`.
///
/// An empty or whitespace-only query yields no results, as does an empty
/// catalog; neither is an error.
pub fn score_paths(query: &str, manifest: &Manifest, limit: usize) -> Vec<ScoredPath> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredPath> = manifest
        .all_paths()
        .filter_map(|path| {
            let score = score_path(&query_lower, &path.to_lowercase());
            (score > 0.0).then(|| ScoredPath {
                path: path.to_string(),
                score,
            })
        })
        .collect();

    // Stable sort: equal scores keep catalog order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

fn score_path(query_lower: &str, path_lower: &str) -> f64 {
    let mut score = if query_lower == path_lower {
        100.0
    } else if path_lower.contains(query_lower) {
        if path_lower.starts_with(query_lower) {
            80.0
        } else if last_segment(path_lower).contains(query_lower) {
            70.0
        } else {
            60.0
        }
    } else {
        token_overlap_score(query_lower, path_lower)
    };

    if score == 0.0 {
        let similarity = positional_similarity(query_lower, path_lower);
        if similarity > SIMILARITY_CUTOFF {
            score = similarity * 30.0;
        }
    }

    score
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Token overlap: hyphens in the query and hyphens/slashes in the path act
/// as word separators; score is 40 scaled by the matched fraction.
fn token_overlap_score(query_lower: &str, path_lower: &str) -> f64 {
    let query_text = query_lower.replace('-', " ");
    let query_words: Vec<&str> = query_text.split_whitespace().collect();
    if query_words.is_empty() {
        return 0.0;
    }

    let path_text = path_lower.replace(['/', '-'], " ");
    let path_words: Vec<&str> = path_text.split_whitespace().collect();

    let matches = query_words
        .iter()
        .filter(|word| path_words.contains(*word))
        .count();

    if matches > 0 {
        40.0 * (matches as f64 / query_words.len() as f64)
    } else {
        0.0
    }
}

/// Index-by-index character equality over the shorter string, divided by
/// the longer length.
fn positional_similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longer = a_chars.len().max(b_chars.len());
    if longer == 0 {
        return 0.0;
    }

    let matching = a_chars
        .iter()
        .zip(b_chars.iter())
        .filter(|(x, y)| x == y)
        .count();

    matching as f64 / longer as f64
}

/// "Did you mean" suggestions for a query that matched nothing.
///
/// Uses a Ratcliff/Obershelp sequence ratio against each cataloged path;
/// paths at or above `cutoff` are returned best first, at most `n`.
pub fn suggest_paths(query: &str, manifest: &Manifest, n: usize, cutoff: f64) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut candidates: Vec<(f64, &str)> = manifest
        .all_paths()
        .filter_map(|path| {
            let ratio = sequence_ratio(&query_lower, &path.to_lowercase());
            (ratio >= cutoff).then_some((ratio, path))
        })
        .collect();

    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    candidates
        .into_iter()
        .take(n)
        .map(|(_, path)| path.to_string())
        .collect()
}

/// Ratcliff/Obershelp similarity: twice the number of matching characters
/// (longest common substring, recursively on both flanks) over the total
/// length of both strings.
fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a_chars, &b_chars) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Longest common substring via rolling DP row
    let mut best_len = 0;
    let mut best_a = 0;
    let mut best_b = 0;
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best_len {
                    best_len = len;
                    best_a = i + 1 - len;
                    best_b = j + 1 - len;
                }
            }
        }
        prev = row;
    }

    if best_len == 0 {
        return 0;
    }

    best_len
        + matching_chars(&a[..best_a], &b[..best_b])
        + matching_chars(&a[best_a + best_len..], &b[best_b + best_len..])
}
