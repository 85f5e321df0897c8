//! Fetcher abstraction.

use std::path::Path;

use async_trait::async_trait;

use super::error::FetchError;

/// The two network operations the pipeline needs.
///
/// Kept behind a trait so tests can run the full pipeline against canned
/// responses without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a page body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Stream a binary resource to `destination`.
    ///
    /// On error the destination may hold a partial file; callers must not
    /// treat mere existence of the path as success.
    async fn fetch_bytes_to(&self, url: &str, destination: &Path) -> Result<(), FetchError>;
}
