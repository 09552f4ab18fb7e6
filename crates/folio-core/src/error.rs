//! Error types for Folio

use thiserror::Error;

/// The main error type for Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("No viable assembly: section kind '{kind}' cannot be placed ({reason})")]
    NoViableAssembly { kind: String, reason: String },

    #[error("Invalid design spec: {0}")]
    InvalidSpec(String),

    #[error("Invalid assembly options: {0}")]
    InvalidOptions(String),

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("Nothing to {0}")]
    EmptyHistory(&'static str),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Section library load error: {0}")]
    LibraryLoadError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::TomlParseError(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::JsonError(err.to_string())
    }
}
