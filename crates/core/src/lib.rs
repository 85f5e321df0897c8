pub mod catalog;
pub mod config;
pub mod images;
pub mod report;
pub mod scraper;
pub mod testing;

pub use catalog::{AdjectiveMap, AnimalEntry};
pub use config::{load_config, load_config_from_str, Config, ConfigError};
pub use images::{
    DownloadSummary, FetchError, Fetcher, HttpFetcher, ImageDownloader, ImagesConfig, Outcome,
};
pub use report::write_report;
pub use scraper::{AdjectiveScraper, ScrapeError, ScraperConfig};
