//! Error types and handling for addjars
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Locally recoverable conditions (a descriptor directory that does not
//! exist, a matched file that is not a jar) are downgraded to warnings at
//! the call site and never reach this type; everything that does reach it
//! aborts the run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for addjars operations
#[derive(Error, Diagnostic, Debug)]
pub enum AddJarsError {
    // Project errors
    #[error("Project manifest not found (searched upward from: {start})")]
    #[diagnostic(
        code(addjars::project::not_found),
        help("Create a project.yaml or pass --project <dir>")
    )]
    ProjectNotFound { start: String },

    #[error("Invalid project directory: {path}")]
    #[diagnostic(code(addjars::project::invalid_dir))]
    ProjectDirInvalid { path: String, reason: String },

    // Manifest errors
    #[error("Failed to parse project manifest: {path}")]
    #[diagnostic(
        code(addjars::manifest::parse_failed),
        help("The manifest must be valid YAML with group, artifact and version fields")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to write manifest: {path}")]
    #[diagnostic(code(addjars::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(addjars::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid glob pattern '{pattern}'")]
    #[diagnostic(
        code(addjars::config::invalid_pattern),
        help("Includes and excludes use glob syntax, e.g. \"*.jar\" or \"vendor/**\"")
    )]
    InvalidPattern { pattern: String, reason: String },

    // Repository errors
    #[error("Failed to install artifact '{artifact}': {reason}")]
    #[diagnostic(code(addjars::repository::install_failed))]
    InstallFailed { artifact: String, reason: String },

    #[error("Could not determine local repository directory")]
    #[diagnostic(
        code(addjars::repository::no_directory),
        help("Set ADDJARS_REPOSITORY_DIR to choose a repository location")
    )]
    RepositoryDirUnavailable,

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(addjars::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(addjars::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AddJarsError {
    fn from(err: std::io::Error) -> Self {
        AddJarsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AddJarsError {
    fn from(err: serde_yaml::Error) -> Self {
        AddJarsError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AddJarsError>;
