//! Terminal states of a per-entry download attempt.

use std::path::PathBuf;

use super::error::FetchError;

/// Why an entry ended without a local image.
#[derive(Debug)]
pub enum Failure {
    /// Fetching the article page failed.
    Page(FetchError),
    /// The page carried no usable image reference.
    NoImage,
    /// Downloading the image bytes failed.
    Download(FetchError),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(e) => write!(f, "page fetch failed: {e}"),
            Self::NoImage => write!(f, "no image found on page"),
            Self::Download(e) => write!(f, "image download failed: {e}"),
        }
    }
}

/// Terminal state of one worker invocation.
///
/// Failures are fully absorbed here; nothing propagates to the batch.
#[derive(Debug)]
pub enum Outcome {
    /// The entry has no page URL, nothing to do.
    Skipped,
    /// A previously downloaded image satisfied the entry without network
    /// work.
    Cached(PathBuf),
    /// Image fetched and stored during this run.
    Done(PathBuf),
    /// The entry stays without a local image; the cause was logged.
    Failed(Failure),
}
