//! Batch orchestration over the per-entry workers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::info;

use crate::catalog::AdjectiveMap;

use super::config::ImagesConfig;
use super::fetch::HttpFetcher;
use super::traits::Fetcher;
use super::types::Outcome;
use super::worker::Worker;

/// Tally of terminal states for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Entries in the input mapping, including ones without a page URL.
    pub total: usize,
    /// Images fetched and stored during this run.
    pub downloaded: usize,
    /// Entries satisfied from the local cache.
    pub cached: usize,
    /// Entries that reached a failure state; details were logged per entry.
    pub failed: usize,
    /// Entries with no page URL, never scheduled.
    pub skipped: usize,
}

/// Downloads representative images for every entry in an [`AdjectiveMap`].
///
/// Concurrency across entries is bounded by a semaphore sized to
/// `config.concurrency`; the limit caps simultaneous network operations, not
/// total work. The batch always runs to completion regardless of how many
/// entries individually fail.
pub struct ImageDownloader {
    config: ImagesConfig,
    fetcher: Arc<dyn Fetcher>,
    semaphore: Arc<Semaphore>,
}

impl ImageDownloader {
    /// Create a downloader with the default HTTP fetcher.
    pub fn new(config: ImagesConfig) -> Self {
        let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(config.timeout_secs)));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a downloader over a custom fetcher (used by tests).
    pub fn with_fetcher(config: ImagesConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.concurrency));
        Self {
            config,
            fetcher,
            semaphore,
        }
    }

    /// Download images for all entries, annotating each successful entry
    /// with its local path.
    ///
    /// Returns once every scheduled entry has reached a terminal state. The
    /// only fatal error is failing to create the cache directory; per-entry
    /// failures are absorbed and counted in the summary.
    pub async fn download_images(
        &self,
        mapping: &mut AdjectiveMap,
    ) -> std::io::Result<DownloadSummary> {
        let start = Instant::now();
        tokio::fs::create_dir_all(&self.config.dir).await?;

        let mut summary = DownloadSummary::default();
        let entries: Vec<_> = mapping
            .values_mut()
            .flat_map(|animals| animals.iter_mut())
            .inspect(|_| summary.total += 1)
            .filter(|entry| entry.page_url.is_some())
            .collect();
        summary.skipped = summary.total - entries.len();

        info!(
            total = summary.total,
            scheduled = entries.len(),
            concurrency = self.config.concurrency,
            "downloading images"
        );

        let worker = Worker {
            fetcher: self.fetcher.as_ref(),
            semaphore: &self.semaphore,
            image_dir: &self.config.dir,
        };

        let outcomes = join_all(entries.into_iter().map(|entry| worker.run(entry))).await;

        for outcome in outcomes {
            match outcome {
                Outcome::Done(_) => summary.downloaded += 1,
                Outcome::Cached(_) => summary.cached += 1,
                Outcome::Failed(_) => summary.failed += 1,
                // Unreachable through the pre-filter, counted for
                // completeness.
                Outcome::Skipped => summary.skipped += 1,
            }
        }

        info!(
            downloaded = summary.downloaded,
            cached = summary.cached,
            failed = summary.failed,
            skipped = summary.skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "image batch finished"
        );

        Ok(summary)
    }
}
