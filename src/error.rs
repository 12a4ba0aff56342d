// Error types for devfolio.
// Covers configuration, catalog loading, and outbound link failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevfolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Catalog {path} could not be loaded: {reason}")]
    Catalog { path: PathBuf, reason: String },

    #[error("Could not open {url}: {source}")]
    LinkOpen {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DevfolioError>;
