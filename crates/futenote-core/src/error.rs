//! Error types for futenote-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using futenote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or seeding the app.
///
/// Store operations themselves never fail; a missing note is a normal
/// not-found state, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Two notes share an id
    #[error("Duplicate note id: {0}")]
    DuplicateId(NoteId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
