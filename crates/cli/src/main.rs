use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faunabook_core::{
    load_config, write_report, AdjectiveScraper, Config, ConfigError, ImageDownloader,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("FAUNABOOK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing file just means defaults.
    let config = match load_config(&config_path) {
        Ok(config) => {
            info!("Loaded configuration from {:?}", config_path);
            config
        }
        Err(ConfigError::FileNotFound(_)) => {
            info!("No config file at {:?}, using defaults", config_path);
            Config::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load config from {config_path:?}"))
        }
    };

    info!("Scraping collateral adjectives from {}", config.scraper.url);
    let scraper = AdjectiveScraper::new(config.scraper.clone());
    let mut mapping = scraper
        .scrape()
        .await
        .context("Failed to scrape the animal names table")?;

    info!("Downloading images to {:?}", config.images.dir);
    let downloader = ImageDownloader::new(config.images.clone());
    let summary = downloader
        .download_images(&mut mapping)
        .await
        .context("Failed to prepare the image cache directory")?;

    info!(
        "Images: {} downloaded, {} cached, {} failed, {} skipped",
        summary.downloaded, summary.cached, summary.failed, summary.skipped
    );

    let report_path = write_report(&mapping, &config.report.output)
        .context("Failed to write the HTML report")?;
    info!("Done. Report saved to {:?}", report_path);

    Ok(())
}
