//! Command dispatch logic for plugdocs

use std::time::Instant;

use crate::cli::{Cli, Commands, SkillCommands};
use crate::commands;
use plugdocs_core::docs::DocsRoot;
use plugdocs_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let docs = DocsRoot::resolve(cli.root.as_deref());

    match &cli.command {
        Commands::Search { query, limit } => {
            commands::search::execute(cli, &docs, query, *limit, start)
        }

        Commands::SearchContent { query, limit } => {
            commands::search_content::execute(cli, &docs, query, *limit, start)
        }

        Commands::List => commands::list::execute(cli, &docs),

        Commands::Status => commands::status::execute(cli, &docs),

        Commands::Skill { command } => match command {
            SkillCommands::Validate { skill_dir } => commands::skill::validate(cli, skill_dir),
            SkillCommands::Props { skill_dir } => commands::skill::props(skill_dir),
        },
    }
}
