//! Errors raised while obtaining story tables.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read story bundle {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML story bundle: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON story bundle: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported story bundle format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}
