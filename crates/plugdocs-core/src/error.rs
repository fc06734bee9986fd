//! Error types and exit codes for plugdocs
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing docs root, missing index, invalid frontmatter,
//!   skill validation failure)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the plugdocs CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing root/index, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during plugdocs operations
#[derive(Error, Debug)]
pub enum DocsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("documentation root not found: {path:?}")]
    RootNotFound { path: PathBuf },

    #[error("documentation directory not found: {path:?}")]
    DocsDirNotFound { path: PathBuf },

    #[error("search index not available (expected at {path:?})")]
    IndexNotAvailable { path: PathBuf },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error("missing required file: SKILL.md (in {path:?})")]
    SkillFileMissing { path: PathBuf },

    #[error("skill validation failed with {count} error(s)")]
    ValidationFailed { count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DocsError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DocsError::UnknownFormat(_)
            | DocsError::DuplicateFormat
            | DocsError::UsageError(_) => ExitCode::Usage,

            DocsError::RootNotFound { .. }
            | DocsError::DocsDirNotFound { .. }
            | DocsError::IndexNotAvailable { .. }
            | DocsError::InvalidFrontmatter { .. }
            | DocsError::NotADirectory { .. }
            | DocsError::SkillFileMissing { .. }
            | DocsError::ValidationFailed { .. } => ExitCode::Data,

            DocsError::Io(_) | DocsError::Json(_) | DocsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier for structured output
    fn error_type(&self) -> &'static str {
        match self {
            DocsError::UnknownFormat(_) => "unknown_format",
            DocsError::DuplicateFormat => "duplicate_format",
            DocsError::UsageError(_) => "usage_error",
            DocsError::RootNotFound { .. } => "root_not_found",
            DocsError::DocsDirNotFound { .. } => "docs_dir_not_found",
            DocsError::IndexNotAvailable { .. } => "index_not_available",
            DocsError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            DocsError::NotADirectory { .. } => "not_a_directory",
            DocsError::SkillFileMissing { .. } => "skill_file_missing",
            DocsError::ValidationFailed { .. } => "validation_failed",
            DocsError::Io(_) => "io_error",
            DocsError::Json(_) => "json_error",
            DocsError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for plugdocs operations
pub type Result<T> = std::result::Result<T, DocsError>;
