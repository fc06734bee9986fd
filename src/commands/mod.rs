//! CLI commands for plugdocs

pub mod dispatch;
pub mod list;
pub mod search;
pub mod search_content;
pub mod skill;
pub mod status;
