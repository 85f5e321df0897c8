//! Error types for the image pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a fetcher for a single network operation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the per-call timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status code.
    #[error("unexpected status code {0}")]
    NonSuccessStatus(u16),

    /// Connection, DNS or protocol level failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Failed to write the response body to the destination file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::NonSuccessStatus(status.as_u16())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
