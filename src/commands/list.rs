//! `plugdocs list` command - list documentation topics

use crate::cli::{Cli, OutputFormat};
use plugdocs_core::docs::DocsRoot;
use plugdocs_core::error::Result;

/// Execute the list command
pub fn execute(cli: &Cli, docs: &DocsRoot) -> Result<()> {
    let topics = docs.topics()?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": topics.len(),
                "topics": topics,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Available documentation files ({}):", topics.len());
            println!();
            for topic in &topics {
                println!("  {}", topic);
            }
        }
    }

    Ok(())
}
