//! `plugdocs skill` commands - validate and read skill frontmatter

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use plugdocs_core::error::{DocsError, Result};
use plugdocs_core::skill;

/// Execute `skill validate`: run all checks and report every violation
pub fn validate(cli: &Cli, skill_dir: &Path) -> Result<()> {
    let errors = skill::validate::validate(skill_dir);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "skill_dir": skill_dir.display().to_string(),
                "valid": errors.is_empty(),
                "errors": errors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if errors.is_empty() {
                if !cli.quiet {
                    println!("Skill is valid!");
                }
            } else {
                println!("Validation failed:");
                for error in &errors {
                    println!("  - {}", error);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DocsError::ValidationFailed {
            count: errors.len(),
        })
    }
}

/// Execute `skill props`: print frontmatter properties as JSON
pub fn props(skill_dir: &Path) -> Result<()> {
    if !skill_dir.is_dir() {
        return Err(DocsError::NotADirectory {
            path: skill_dir.to_path_buf(),
        });
    }

    let properties = skill::read_properties(skill_dir)?;
    println!("{}", serde_json::to_string_pretty(&properties)?);
    Ok(())
}
