//! Error handling for the bundled executor.
//!
//! The [`DownloadAdapter`](crate::DownloadAdapter) never produces errors of
//! its own: it hands back whatever its executor raised. This module defines
//! the error-kind contract of the executor shipped with this crate,
//! [`HttpExecutor`](crate::HttpExecutor). Other executors are free to use
//! their own error type.

use std::io;
use thiserror::Error;

/// Errors raised by [`HttpExecutor`](crate::HttpExecutor).
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The request could not be acted upon as given.
    ///
    /// Returned for URLs that cannot be parsed and for destination names that
    /// would escape the downloads directory.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure or a non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// Creating the downloads directory or writing the file failed.
    #[error("Filesystem error: {source}")]
    Filesystem {
        #[from]
        source: io::Error,
    },

    /// Error from an underlying system that fits no other category.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ExecutorError {
    fn from(e: reqwest::Error) -> Self {
        ExecutorError::Network(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for ExecutorError {
    fn from(e: reqwest_middleware::Error) -> Self {
        ExecutorError::Network(e.to_string())
    }
}

impl ExecutorError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutorError::InvalidArgument(_) => "invalid-argument",
            ExecutorError::Network(_) => "network",
            ExecutorError::Filesystem { .. } => "filesystem",
            ExecutorError::Internal(_) => "internal",
        }
    }
}

/// Result type alias for operations that can fail with an [`ExecutorError`].
pub type Result<T> = std::result::Result<T, ExecutorError>;
