//! CLI argument parsing for plugdocs
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level,
//! --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use plugdocs_core::search::DEFAULT_LIMIT;

pub use plugdocs_core::format::OutputFormat;

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: plugdocs_core::error::DocsError| e.to_string())
}

/// Plugdocs - documentation search and skill metadata CLI
#[derive(Parser, Debug)]
#[command(name = "plugdocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Documentation root directory (overrides PLUGDOCS_PATH)
    #[arg(long, global = true, env = "PLUGDOCS_PATH")]
    pub root: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuzzy search over documentation paths
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Full-text search over indexed document content
    SearchContent {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// List all documentation topics
    List,

    /// Show installation status
    Status,

    /// Skill directory tooling
    Skill {
        #[command(subcommand)]
        command: SkillCommands,
    },
}

/// Skill subcommands
#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// Validate a skill directory's frontmatter
    Validate {
        /// Path to the skill directory
        skill_dir: PathBuf,
    },

    /// Print skill frontmatter properties as JSON
    Props {
        /// Path to the skill directory
        skill_dir: PathBuf,
    },
}
