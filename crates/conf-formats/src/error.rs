//! Error types for format front ends.

use crate::format::Format;

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Failed to parse {format} content: {message}")]
    Parse { format: Format, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Configuration trees are string-keyed by contract; a document with a
    /// non-string mapping key cannot be represented.
    #[error("Non-string mapping key in {format} document: {key}")]
    NonStringKey { format: Format, key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }
}
