//! Error types for hubpulls-core

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the hubpulls-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (listing page body or stored file)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A file in a store directory does not follow the store's naming scheme
    #[error("unexpected file name in {dir}: {name}")]
    UnexpectedFileName { dir: PathBuf, name: String },

    /// Async runtime could not be built
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for hubpulls-core
pub type Result<T> = std::result::Result<T, Error>;
