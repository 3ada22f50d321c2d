//! Error types for discshelf

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the discshelf application
#[derive(Debug, Error)]
pub enum DiscshelfError {
    #[error("Not a discshelf library: {0}")]
    NotLibraryDirectory(PathBuf),

    #[error("Invalid import file: {0}")]
    ImportFormat(String),

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiscshelfError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiscshelfError::NotLibraryDirectory(_) => 2,
            DiscshelfError::ImportFormat(_) => 3,
            DiscshelfError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiscshelfError::NotLibraryDirectory(path) => {
                format!(
                    "Not a discshelf library: {}\n\n\
                    Suggestions:\n\
                    • Run 'discshelf init' in this directory to create a new library\n\
                    • Navigate to an existing discshelf library\n\
                    • Set DISCSHELF_ROOT environment variable to your library path",
                    path.display()
                )
            }
            DiscshelfError::ImportFormat(msg) => {
                format!(
                    "Invalid import file: {}\n\n\
                    Expected either a backup produced by 'discshelf export'\n\
                    (an object with an \"entries\" or \"items\" array) or a bare\n\
                    JSON array of entry objects. The existing collection was left\n\
                    unchanged.",
                    msg
                )
            }
            DiscshelfError::Validation(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Every entry needs a non-empty title and media type.\n\
                    Example: discshelf add \"Dune\" --media Blu-ray",
                    msg
                )
            }
            DiscshelfError::Config(msg) => {
                if msg.contains("Invalid sort mode") {
                    format!(
                        "{}\n\n\
                        Valid sort modes: newest, oldest, title, title-desc\n\
                        Example: discshelf list --sort title",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiscshelfError
pub type Result<T> = std::result::Result<T, DiscshelfError>;
