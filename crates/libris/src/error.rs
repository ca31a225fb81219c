//! CLI error types with miette diagnostics.
//!
//! Maps store error statuses and configuration failures into user-facing
//! errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use libris_config::ConfigError;
use libris_core::{ADD_BOOK_FAILED, CoreError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(unused_assignments)]
pub enum CliError {
    // ── Requests ─────────────────────────────────────────────────────

    #[error("Request to the books service failed: {message}")]
    #[diagnostic(
        code(libris::request_failed),
        help(
            "Check that the books service is reachable.\n\
             Current settings: libris config show"
        )
    )]
    RequestFailed { message: String },

    #[error("The books service did not accept '{name}'")]
    #[diagnostic(code(libris::rejected))]
    Rejected { name: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(libris::validation))]
    Validation { field: String, reason: String },

    #[error("Both name and author are required")]
    #[diagnostic(
        code(libris::incomplete_book),
        help("Pass non-blank values: libris add --name <NAME> --author <AUTHOR>")
    )]
    IncompleteBook,

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(libris::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(libris::config))]
    Config { message: String },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(libris::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(libris::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Translate a store error status into a CLI error.
    pub fn from_status(message: String, name: &str) -> Self {
        if message == ADD_BOOK_FAILED {
            Self::Rejected { name: name.into() }
        } else {
            Self::RequestFailed { message }
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RequestFailed { .. } => exit_code::CONNECTION,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } | Self::IncompleteBook | Self::ConfigExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
            other => Self::RequestFailed {
                message: other.to_string(),
            },
        }
    }
}
