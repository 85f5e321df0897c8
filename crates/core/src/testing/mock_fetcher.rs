//! Mock fetcher for testing.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::images::{FetchError, Fetcher};

/// Mock implementation of the [`Fetcher`] trait.
///
/// Provides controllable behavior for testing:
/// - canned page markup and image bodies per URL
/// - scripted failures per URL
/// - a recorded request log for zero-network assertions
/// - an in-flight counter tracking the maximum observed concurrency
///
/// URLs with no configured response answer with a 404 status error.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
    bodies: RwLock<HashMap<String, Vec<u8>>>,
    failures: RwLock<HashSet<String>>,
    requests: Arc<RwLock<Vec<String>>>,
    delay: RwLock<Option<Duration>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the markup returned for a page URL.
    pub async fn set_page(&self, url: impl Into<String>, markup: impl Into<String>) {
        self.pages.write().await.insert(url.into(), markup.into());
    }

    /// Configure the bytes returned for an image URL.
    pub async fn set_image(&self, url: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.bodies.write().await.insert(url.into(), bytes.into());
    }

    /// Make every request for `url` fail with a transport error.
    pub async fn set_failure(&self, url: impl Into<String>) {
        self.failures.write().await.insert(url.into());
    }

    /// Hold every request open for `delay`, forcing requests to overlap.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// All URLs requested so far, in request order.
    pub async fn recorded_requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Highest number of requests that were in flight at the same instant.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self, url: &str) -> Result<(), FetchError> {
        self.requests.write().await.push(url.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failures.read().await.contains(url) {
            return Err(FetchError::Transport("injected failure".to_string()));
        }
        Ok(())
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let gate = self.enter(url).await;
        let result = match gate {
            Err(e) => Err(e),
            Ok(()) => match self.pages.read().await.get(url) {
                Some(markup) => Ok(markup.clone()),
                None => Err(FetchError::NonSuccessStatus(404)),
            },
        };
        self.exit();
        result
    }

    async fn fetch_bytes_to(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        let gate = self.enter(url).await;
        let result = match gate {
            Err(e) => Err(e),
            Ok(()) => match self.bodies.read().await.get(url) {
                Some(bytes) => tokio::fs::write(destination, bytes)
                    .await
                    .map_err(|e| FetchError::Io {
                        path: destination.to_path_buf(),
                        source: e,
                    }),
                None => Err(FetchError::NonSuccessStatus(404)),
            },
        };
        self.exit();
        result
    }
}
