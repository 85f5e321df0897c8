//! Representative-image acquisition pipeline.
//!
//! For each animal with an article page, the pipeline checks the local image
//! cache, fetches the page on a miss, extracts the best image reference from
//! the markup, downloads it, and annotates the entry with the local path.
//! Failures are isolated per entry; one bad page never aborts the batch.

mod cache;
mod config;
mod downloader;
mod error;
mod fetch;
mod locate;
mod traits;
mod types;
mod worker;

pub mod filename;

pub use config::ImagesConfig;
pub use downloader::{DownloadSummary, ImageDownloader};
pub use error::FetchError;
pub use fetch::HttpFetcher;
pub use traits::Fetcher;
pub use types::{Failure, Outcome};
