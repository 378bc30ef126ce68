use std::io;

use thiserror::Error;

/// Library-wide error type for review-cli operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Assistant identifier is not in the catalog.
    #[error("Invalid assistant '{name}'. Options: {available}")]
    InvalidAssistant { name: String, available: String },

    /// Script flavor identifier is not one of the supported flavors.
    #[error("Invalid script type '{name}'. Options: {available}")]
    InvalidScriptFlavor { name: String, available: String },

    /// The user aborted the interactive selector.
    #[error("Selection cancelled")]
    SelectionCancelled,

    /// Embedded assistant catalog entry is malformed.
    #[error("Invalid catalog entry '{entry}': {reason}")]
    InvalidCatalogMetadata { entry: String, reason: String },

    /// Embedded template asset is missing.
    #[error("Missing embedded template: {0}")]
    MissingTemplate(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
