//! Error types for the liftplan_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftplan_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested program id is not in the catalog
    #[error("Unknown program: '{0}'")]
    UnknownProgram(String),

    /// Program has no split for the requested number of training days
    #[error("Program '{program_id}' has no {day_count}-day split (supported: {supported:?})")]
    UnsupportedDayCount {
        program_id: String,
        day_count: u8,
        supported: Vec<u8>,
    },

    /// Catalog data violates its own invariants
    #[error("Inconsistent catalog: {0}")]
    InconsistentCatalog(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for errors caused by caller input rather than bad data or I/O
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownProgram(_) | Error::UnsupportedDayCount { .. }
        )
    }
}
