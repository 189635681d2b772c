//! Error types for images-readme
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for images-readme operations
pub type ReadmeResult<T> = Result<T, ReadmeError>;

/// Main error type for descriptor resolution and loading
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// Descriptor file does not exist at the resolved path
    #[error(
        "{} missing or inaccessible.\nRun `cp {} {}` and edit it.",
        .path.display(),
        .scratch_path.display(),
        .path.display()
    )]
    Missing { path: PathBuf, scratch_path: PathBuf },

    /// Descriptor file exists but could not be decoded
    #[error("{message}")]
    Malformed { path: PathBuf, message: String },

    /// Request document could not be decoded
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration file could not be decoded
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Starter template could not be rendered
    #[error("template rendering error: {0}")]
    Template(#[from] hcl::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadmeError {
    /// Stable machine-readable kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ReadmeError::Missing { .. } => "missing",
            ReadmeError::Malformed { .. } => "malformed",
            ReadmeError::InvalidRequest { .. } => "invalid_request",
            ReadmeError::InvalidConfig { .. } => "invalid_config",
            ReadmeError::Template(_) => "template",
            ReadmeError::Io(_) => "io",
        }
    }

    /// Short, per-kind summary line shown to the caller.
    pub fn summary(&self) -> String {
        match self {
            ReadmeError::Missing { .. } => "README.hcl error".to_string(),
            ReadmeError::Malformed { path, .. } => format!("Unable to parse {}", path.display()),
            ReadmeError::InvalidRequest { .. } => "Invalid request".to_string(),
            ReadmeError::InvalidConfig { file, .. } => {
                format!("Invalid configuration in {}", file.display())
            }
            ReadmeError::Template(_) => "Template error".to_string(),
            ReadmeError::Io(_) => "I/O error".to_string(),
        }
    }

    /// Detail string: remediation for `Missing`, decoder text for `Malformed`.
    pub fn detail(&self) -> String {
        match self {
            ReadmeError::Malformed { message, .. } => message.clone(),
            ReadmeError::InvalidRequest { message } => message.clone(),
            ReadmeError::InvalidConfig { message, .. } => message.clone(),
            ReadmeError::Template(err) => err.to_string(),
            ReadmeError::Io(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}
