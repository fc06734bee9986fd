//! `plugdocs search-content` command - full-text content search
//!
//! A missing or unreadable index is a hard error (exit code 3), distinct
//! from a search that simply matched nothing.

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use plugdocs_core::catalog::{category_label, Manifest};
use plugdocs_core::docs::DocsRoot;
use plugdocs_core::error::Result;
use plugdocs_core::search::content::{score_content, ContentHit};

/// Preview length cap in the JSON envelope
const PREVIEW_CAP: usize = 150;

/// Execute the search-content command
pub fn execute(cli: &Cli, docs: &DocsRoot, query: &str, limit: usize, start: Instant) -> Result<()> {
    let index = docs.require_search_index()?;
    let manifest = docs.manifest()?;
    let results = score_content(query, index, limit);

    if cli.verbose {
        debug!(result_count = results.len(), elapsed = ?start.elapsed(), "search_content");
    }

    match cli.format {
        OutputFormat::Json => output_json(query, &results, manifest)?,
        OutputFormat::Human => output_human(query, &results),
    }

    Ok(())
}

fn output_json(query: &str, results: &[ContentHit], manifest: &Manifest) -> Result<()> {
    let mut category_counts: Vec<(String, usize)> = Vec::new();
    let entries: Vec<serde_json::Value> = results
        .iter()
        .map(|hit| {
            let category = manifest.category_for(&hit.path);
            let label = category
                .map(category_label)
                .unwrap_or_else(|| "Unknown".to_string());
            match category_counts.iter_mut().find(|(name, _)| *name == label) {
                Some((_, count)) => *count += 1,
                None => category_counts.push((label.clone(), 1)),
            }

            serde_json::json!({
                "path": hit.path,
                "title": hit.title,
                "category": category,
                "label": label,
                "score": hit.score,
                "preview": cap_chars(&hit.preview, PREVIEW_CAP),
                "keywords": hit.keywords,
                "file": hit.file,
            })
        })
        .collect();

    let output = serde_json::json!({
        "query": query,
        "total_results": results.len(),
        "results": entries,
        "category_summary": category_counts
            .iter()
            .map(|(label, count)| (label.clone(), serde_json::json!(count)))
            .collect::<serde_json::Map<_, _>>(),
        "unique_categories": category_counts.len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(query: &str, results: &[ContentHit]) {
    if results.is_empty() {
        println!("No results found for: '{}'", query);
        return;
    }

    println!("Found {} results for: '{}'", results.len(), query);
    println!();

    for (i, hit) in results.iter().enumerate() {
        println!("{:2}. {} ({})", i + 1, hit.title, hit.path);
        println!(
            "    Score: {}  |  {}",
            hit.score,
            cap_chars(&hit.preview, 80)
        );
        println!();
    }
}

fn cap_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
