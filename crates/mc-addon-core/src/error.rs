//! Add-on authoring errors.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddonError>;

#[derive(Debug, Error)]
pub enum AddonError {
    #[error("invalid identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: &'static str },

    #[error("{field} out of range: {value} not in {min}..={max}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("packaging error: {0}")]
    Package(String),
}

impl AddonError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AddonError::Io {
            path: path.into(),
            source,
        }
    }
}
