//! Error types for the container client.

use thiserror::Error;

/// Result type alias for container client operations.
pub type DockerResult<T> = Result<T, DockerError>;

/// Errors that can occur while talking to the container runtime.
#[derive(Error, Debug)]
pub enum DockerError {
    #[error("Unable to connect to Docker daemon: {0}")]
    Connection(String),

    #[error("Docker API error: {0}")]
    Api(#[from] bollard::errors::Error),
}
