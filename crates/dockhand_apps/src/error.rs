//! Error types for the app catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for app catalog operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur while loading or serving app definitions.
#[derive(Error, Debug)]
pub enum AppError {
    /// One definition file is unusable; bulk loads warn and skip these.
    #[error("Malformed definition in {file}: {message}")]
    MalformedDefinition { file: PathBuf, message: String },

    /// The definition directory itself cannot be enumerated; fatal to a load.
    #[error("App repository unavailable at {path}: {message}")]
    RepositoryUnavailable { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
