//! Error types for the document service
//!
//! Every variant maps to a structured failure record at the outer boundary
//! (see [`crate::response`]); none of them is fatal to the process.

use ddocs_core::SectionError;
use std::path::PathBuf;

/// Errors surfaced by document operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Requested document does not exist under the project root
    #[error("Document not found: {path}")]
    NotFound { path: String },

    /// Path is absolute or escapes the project root
    #[error("Invalid document path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// Document exceeds the configured size limit
    #[error("Document too large: {path} is {size} bytes (max: {max})")]
    TooLarge { path: String, size: u64, max: u64 },

    /// No template registered under this name
    #[error("Unknown template type: {0}")]
    UnknownTemplate(String),

    /// No review prompt registered under this name
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    /// Marker lookup / replacement failed
    #[error(transparent)]
    Section(#[from] SectionError),

    /// IO error reading or writing a document
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Create not-found error for a requested path
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create invalid-path error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine tag for this error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::InvalidPath { .. } => "InvalidPath",
            Self::TooLarge { .. } => "TooLarge",
            Self::UnknownTemplate(_) => "UnknownTemplate",
            Self::UnknownPrompt(_) => "UnknownPrompt",
            Self::Section(err) => err.kind(),
            Self::Io { .. } => "Io",
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
