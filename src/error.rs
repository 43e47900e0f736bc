//! Error types for keyrotor.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rotation(#[from] RotationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading `.keyrotor.toml` or resolving provider profiles.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// Errors for user-supplied names.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyName(&'static str),

    #[error("invalid {kind} '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },
}

/// Errors raised while rotating.
#[derive(Error, Debug)]
pub enum RotationError {
    /// No non-empty candidate variable exists for the prefix.
    #[error("{message}")]
    EmptyPool { prefix: String, message: String },

    /// The selector was handed an empty pool.
    #[error("no candidates to select from")]
    NoCandidates,

    #[error("failed to write {channel} record to {}: {source}", path.display())]
    Sink {
        channel: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
