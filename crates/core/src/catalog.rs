//! Shared data model for the scrape/download/report pipeline.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One animal row from the source table.
///
/// Created by the scraper, annotated in place by the image downloader,
/// consumed by the report renderer. `local_image` stays `None` for entries
/// that have no page, no usable image, or whose download failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalEntry {
    pub name: String,
    /// Absolute URL of the animal's article page, when the table links one.
    pub page_url: Option<String>,
    /// Path of the locally cached image, set once a download (or cache hit)
    /// succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_image: Option<PathBuf>,
}

impl AnimalEntry {
    pub fn new(name: impl Into<String>, page_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            page_url,
            local_image: None,
        }
    }
}

/// Collateral adjective -> animals carrying it.
///
/// BTreeMap so the report renders in a stable alphabetical order.
pub type AdjectiveMap = BTreeMap<String, Vec<AnimalEntry>>;
