//! Error types for the game library.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for `Config`.
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An image asset could not be read or decoded.
    #[error("failed to load asset {key}: {message}")]
    Asset { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
