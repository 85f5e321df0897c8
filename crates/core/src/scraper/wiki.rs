//! Wikipedia table parsing.

use std::sync::Arc;
use std::time::Duration;

use scraper::{ElementRef, Html, Node, Selector};
use tracing::info;

use crate::catalog::{AdjectiveMap, AnimalEntry};
use crate::images::{Fetcher, HttpFetcher};

use super::config::ScraperConfig;
use super::ScrapeError;

/// Prefix for making relative article links absolute.
const WIKI_BASE: &str = "https://en.wikipedia.org";

/// Scraper for the collateral adjectives table.
pub struct AdjectiveScraper {
    config: ScraperConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl AdjectiveScraper {
    /// Create a scraper with the default HTTP fetcher.
    pub fn new(config: ScraperConfig) -> Self {
        let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(config.timeout_secs)));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a scraper over a custom fetcher (used by tests).
    pub fn with_fetcher(config: ScraperConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Fetch the source page and parse it into an adjective mapping.
    pub async fn scrape(&self) -> Result<AdjectiveMap, ScrapeError> {
        info!(url = %self.config.url, "fetching animal names table");
        let markup = self.fetcher.fetch_text(&self.config.url).await?;
        let mapping = parse(&markup)?;
        info!(
            adjectives = mapping.len(),
            animals = mapping.values().map(Vec::len).sum::<usize>(),
            "table scraped"
        );
        Ok(mapping)
    }
}

/// Parse the adjective mapping out of page markup.
///
/// The target is the second `wikitable` on the page; the first is a terms
/// glossary. Column positions are resolved from the header row rather than
/// hardcoded, so column reordering upstream does not break the parse.
pub fn parse(markup: &str) -> Result<AdjectiveMap, ScrapeError> {
    let document = Html::parse_document(markup);

    let table_selector = Selector::parse("table.wikitable").expect("invalid static selector");
    let row_selector = Selector::parse("tr").expect("invalid static selector");
    let header_selector = Selector::parse("th").expect("invalid static selector");
    let cell_selector = Selector::parse("td, th").expect("invalid static selector");
    let link_selector = Selector::parse("a").expect("invalid static selector");

    let table = document
        .select(&table_selector)
        .nth(1)
        .ok_or(ScrapeError::TableNotFound)?;

    let mut rows = table.select(&row_selector);
    let header_row = rows.next().ok_or(ScrapeError::TableNotFound)?;
    let headers: Vec<String> = header_row
        .select(&header_selector)
        .map(|th| th.text().collect::<String>().trim().to_lowercase())
        .collect();

    let name_idx = headers.iter().position(|h| h == "animal");
    let adjective_idx = headers.iter().position(|h| h == "collateral adjective");
    let (name_idx, adjective_idx) = match (name_idx, adjective_idx) {
        (Some(n), Some(a)) => (n, a),
        _ => return Err(ScrapeError::MissingColumns { headers }),
    };

    let mut mapping = AdjectiveMap::new();

    for row in rows {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() <= name_idx.max(adjective_idx) {
            continue;
        }

        let name_cell = cells[name_idx];
        let link = name_cell.select(&link_selector).next();

        let raw_name: String = match link {
            Some(a) => a.text().collect(),
            None => name_cell.text().collect(),
        };
        // Drop parenthesized qualifiers, e.g. "Ass (donkey)" -> "Ass".
        let name = raw_name
            .trim()
            .split(" (")
            .next()
            .unwrap_or_default()
            .to_string();
        if name.is_empty() {
            continue;
        }

        let page_url = link
            .and_then(|a| a.value().attr("href"))
            .map(absolutize_href);

        for adjective in parse_cell_text(cells[adjective_idx]) {
            mapping
                .entry(adjective.to_lowercase())
                .or_default()
                .push(AnimalEntry::new(name.clone(), page_url.clone()));
        }
    }

    Ok(mapping)
}

fn absolutize_href(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{WIKI_BASE}{href}")
    }
}

/// Extract the comma-separated values of a table cell, dropping footnote
/// markers and treating `<br>` as a separator.
fn parse_cell_text(cell: ElementRef) -> Vec<String> {
    let mut parts = Vec::new();
    for child in cell.children() {
        match child.value() {
            Node::Text(text) => push_parts(&mut parts, text),
            Node::Element(element) => {
                if element.name() == "sup" || element.name() == "br" {
                    continue;
                }
                if let Some(element_ref) = ElementRef::wrap(child) {
                    push_parts(&mut parts, &text_without_footnotes(element_ref));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collect an element's text, skipping `sup` footnote subtrees.
fn text_without_footnotes(element: ElementRef) -> String {
    let mut out = String::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() != "sup" => {
                if let Some(element_ref) = ElementRef::wrap(child) {
                    out.push_str(&text_without_footnotes(element_ref));
                }
            }
            _ => {}
        }
    }
    out
}

fn push_parts(parts: &mut Vec<String>, text: &str) {
    for part in text.split(',') {
        let part = part.trim();
        if !part.is_empty() {
            parts.push(part.to_string());
        }
    }
}
