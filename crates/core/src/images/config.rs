//! Image pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the image downloader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Flat directory where downloaded images are cached.
    /// Created on first run if absent.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Maximum number of entries fetching over the network at once.
    /// Bounds simultaneous connections, not total work.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-request timeout in seconds, applied to page and image fetches
    /// alike.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_concurrency() -> usize {
    10
}

fn default_timeout() -> u64 {
    10
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout(),
        }
    }
}
