//! `plugdocs status` command - installation status report

use crate::cli::{Cli, OutputFormat};
use plugdocs_core::docs::DocsRoot;
use plugdocs_core::error::{DocsError, Result};

/// Execute the status command
pub fn execute(cli: &Cli, docs: &DocsRoot) -> Result<()> {
    let status = docs.status()?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Human => {
            println!("Plugdocs - Installation Status");
            println!("{}", "=".repeat(40));
            println!("Location: {}", status.location);
            println!("Installed: {}", if status.installed { "Yes" } else { "No" });

            if status.installed {
                println!("Documentation files: {}", status.doc_count);
                println!("Manifest paths: {}", status.manifest_paths);

                if let Some(last_updated) = status.last_updated {
                    println!("Last updated: {}", last_updated.to_rfc3339());
                }

                if !status.categories.is_empty() {
                    println!("Categories: {}", status.categories.len());
                    for category in &status.categories {
                        println!("  {}: {} paths", category.label, category.count);
                    }
                }

                match status.indexed_files {
                    Some(count) => println!("Search index: {} files indexed", count),
                    None => println!("Search index: not built"),
                }
            }
        }
    }

    // A missing install is reported above but still fails the command
    if status.installed {
        Ok(())
    } else {
        Err(DocsError::RootNotFound {
            path: docs.root().to_path_buf(),
        })
    }
}
