//! Error types for Berea.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// External verse service unreachable, timed out, or returned non-200.
    /// Always recoverable: callers substitute a per-verse placeholder.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Malformed verse reference string. Recoverable, same treatment as Lookup.
    #[error("Invalid verse reference: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
