//! Error types for the AAC board

use std::io;
use thiserror::Error;

/// Main error type for the AAC board
#[derive(Error, Debug)]
pub enum AacError {
    /// An empty key was handed to an associative array
    #[error("Invalid key: keys must not be empty")]
    InvalidKey,

    /// Lookup miss inside an associative array
    ///
    /// Never returned from the public board operations; categories and
    /// mappings translate it into `ItemNotFound` or `UnknownSelection`.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Image {image} is not part of category {category}")]
    ItemNotFound { category: String, image: String },

    #[error("Image {0} is not a known category")]
    UnknownSelection(String),

    #[error("Board definition error on line {line}: {message}")]
    SourceFormat { line: usize, message: String },

    #[error("Cannot write board definition: {0}")]
    Unserializable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, AacError>;

impl AacError {
    /// True for errors a user can recover from by picking again
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            AacError::ItemNotFound { .. } | AacError::UnknownSelection(_)
        )
    }
}

impl From<String> for AacError {
    fn from(s: String) -> Self {
        AacError::Other(s)
    }
}

impl From<&str> for AacError {
    fn from(s: &str) -> Self {
        AacError::Other(s.to_string())
    }
}
