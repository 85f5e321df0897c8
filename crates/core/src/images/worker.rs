//! Per-entry download worker.
//!
//! One invocation drives a single entry to a terminal state:
//! skip (no page), cache hit, success, or an isolated, logged failure.

use std::path::Path;

use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::catalog::AnimalEntry;

use super::cache::probe;
use super::filename::build_filename;
use super::locate::extract_image_url;
use super::traits::Fetcher;
use super::types::{Failure, Outcome};

pub(crate) struct Worker<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub semaphore: &'a Semaphore,
    pub image_dir: &'a Path,
}

impl Worker<'_> {
    /// Run the state machine for one entry.
    ///
    /// Never returns an error; every failure is logged here and recorded as
    /// an [`Outcome::Failed`]. The concurrency permit is held exactly for
    /// the network-bound section and released on every exit path.
    pub(crate) async fn run(&self, entry: &mut AnimalEntry) -> Outcome {
        let Some(page_url) = entry.page_url.clone() else {
            debug!(name = %entry.name, "no page url, skipping");
            return Outcome::Skipped;
        };

        // Cheap local probe before any network work.
        if let Some(existing) = probe(self.image_dir, &entry.name) {
            debug!(name = %entry.name, path = %existing.display(), "image already cached");
            entry.local_image = Some(existing.clone());
            return Outcome::Cached(existing);
        }

        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("semaphore never closed");

        let markup = match self.fetcher.fetch_text(&page_url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!(name = %entry.name, url = %page_url, error = %e, "page fetch failed");
                return Outcome::Failed(Failure::Page(e));
            }
        };

        let Some(image_url) = extract_image_url(&markup, &page_url) else {
            warn!(name = %entry.name, url = %page_url, "no image found on page");
            return Outcome::Failed(Failure::NoImage);
        };

        let destination = self.image_dir.join(build_filename(&entry.name, &image_url));

        // The prefix probe above can miss when a concurrent worker for an
        // identically sanitized name wrote the file in the meantime.
        if destination.exists() {
            debug!(name = %entry.name, path = %destination.display(), "cached after locate");
            entry.local_image = Some(destination.clone());
            return Outcome::Cached(destination);
        }

        match self.fetcher.fetch_bytes_to(&image_url, &destination).await {
            Ok(()) => {
                info!(name = %entry.name, path = %destination.display(), "image saved");
                entry.local_image = Some(destination.clone());
                Outcome::Done(destination)
            }
            Err(e) => {
                warn!(name = %entry.name, url = %image_url, error = %e, "image download failed");
                Outcome::Failed(Failure::Download(e))
            }
        }
    }
}
