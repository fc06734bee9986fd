//! `plugdocs search` command - fuzzy path search

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use plugdocs_core::catalog::{category_label, Manifest};
use plugdocs_core::docs::DocsRoot;
use plugdocs_core::error::Result;
use plugdocs_core::search::paths::{score_paths, suggest_paths, ScoredPath};

/// Suggestion parameters for the "did you mean" fallback
const SUGGESTION_COUNT: usize = 5;
const SUGGESTION_CUTOFF: f64 = 0.4;

/// Execute the search command
pub fn execute(cli: &Cli, docs: &DocsRoot, query: &str, limit: usize, start: Instant) -> Result<()> {
    let manifest = docs.manifest()?;
    let results = score_paths(query, manifest, limit);

    if cli.verbose {
        debug!(result_count = results.len(), elapsed = ?start.elapsed(), "search_paths");
    }

    match cli.format {
        OutputFormat::Json => output_json(query, &results, manifest)?,
        OutputFormat::Human => output_human(cli, query, &results, manifest),
    }

    Ok(())
}

fn output_json(query: &str, results: &[ScoredPath], manifest: &Manifest) -> Result<()> {
    let entries: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            let category = manifest.category_for(&result.path);
            serde_json::json!({
                "path": result.path,
                "score": result.score,
                "category": category,
                "label": category.map(category_label),
            })
        })
        .collect();

    let output = serde_json::json!({
        "query": query,
        "total_results": results.len(),
        "results": entries,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, query: &str, results: &[ScoredPath], manifest: &Manifest) {
    if results.is_empty() {
        println!("No results found for: '{}'", query);

        let suggestions = suggest_paths(query, manifest, SUGGESTION_COUNT, SUGGESTION_CUTOFF);
        if !suggestions.is_empty() {
            println!();
            println!("Did you mean:");
            for suggestion in suggestions {
                println!("  {}", suggestion);
            }
        }
        return;
    }

    println!("Found {} results for: '{}'", results.len(), query);
    println!();

    // Category summary when results span multiple categories
    let mut category_counts: Vec<(String, usize)> = Vec::new();
    for result in results {
        let label = manifest
            .category_for(&result.path)
            .map(category_label)
            .unwrap_or_else(|| "Unknown".to_string());
        match category_counts.iter_mut().find(|(name, _)| *name == label) {
            Some((_, count)) => *count += 1,
            None => category_counts.push((label, 1)),
        }
    }

    if category_counts.len() > 1 && !cli.quiet {
        let summary = category_counts
            .iter()
            .map(|(label, count)| format!("{} ({})", label, count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Categories: {}", summary);
        println!();
    }

    for (i, result) in results.iter().enumerate() {
        let stars = if result.score >= 80.0 {
            "***"
        } else if result.score >= 60.0 {
            "**"
        } else {
            "*"
        };
        let label = manifest
            .category_for(&result.path)
            .map(category_label)
            .unwrap_or_else(|| "Unknown".to_string());

        println!("{:2}. [{}] {}", i + 1, stars, result.path);
        println!("    Category: {}  |  Score: {:.1}", label, result.score);
        println!();
    }
}
