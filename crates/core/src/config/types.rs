use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::images::ImagesConfig;
use crate::scraper::ScraperConfig;

/// Root configuration.
///
/// Every section has defaults, so running without a config file works.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report renderer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Where the rendered HTML document is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("output.html")
}
