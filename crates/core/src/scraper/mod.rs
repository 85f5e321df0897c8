//! Collateral-adjective table scraper.
//!
//! Pulls the "List of animal names" table and turns it into a mapping from
//! collateral adjective to the animals carrying it, each with its article
//! page URL when the table links one.

mod config;
mod wiki;

pub use config::ScraperConfig;
pub use wiki::AdjectiveScraper;

use thiserror::Error;

use crate::images::FetchError;

/// Errors from scraping the source table.
///
/// Unlike per-entry image failures, these are fatal for the run; without
/// the table there is nothing to do.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch source page: {0}")]
    Fetch(#[from] FetchError),

    #[error("could not find the collateral adjectives table")]
    TableNotFound,

    #[error("required columns missing, found headers: {headers:?}")]
    MissingColumns { headers: Vec<String> },
}
