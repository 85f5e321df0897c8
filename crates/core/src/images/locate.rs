//! Representative-image extraction from article markup.
//!
//! Rules run in strict priority order, structured placement first:
//! 1. first image inside the biota infobox,
//! 2. image inside a `mw:File/Thumb` container,
//! 3. image inside a generic `mw:File` container,
//! 4. first `mw-file-element` image anywhere in the document.
//!
//! No match is a normal outcome; plenty of article pages carry no usable
//! image.

use scraper::{Html, Selector};

/// Host used to absolutize site-relative references when the page URL has
/// no parseable host.
const DEFAULT_HOST: &str = "en.wikipedia.org";

const RULES: [&str; 4] = [
    "table.infobox.biota img[src]",
    r#"[typeof="mw:File/Thumb"] img[src]"#,
    r#"[typeof="mw:File"] img[src]"#,
    "img.mw-file-element[src]",
];

/// Extract the best image URL from `markup`, absolutized against the host
/// of `page_url`.
pub(crate) fn extract_image_url(markup: &str, page_url: &str) -> Option<String> {
    let document = Html::parse_document(markup);
    let src = first_image_src(&document)?;
    Some(normalize(src, page_url))
}

fn first_image_src(document: &Html) -> Option<&str> {
    for rule in RULES {
        let selector = Selector::parse(rule).expect("invalid static selector");
        if let Some(img) = document.select(&selector).next() {
            if let Some(src) = img.value().attr("src") {
                return Some(src);
            }
        }
    }
    None
}

/// `//x` becomes `https://x`, `/x` becomes `https://<page-host>/x`,
/// everything else passes through unchanged.
fn normalize(src: &str, page_url: &str) -> String {
    if let Some(rest) = src.strip_prefix("//") {
        format!("https://{rest}")
    } else if src.starts_with('/') {
        let host = url::Url::parse(page_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        format!("https://{host}{src}")
    } else {
        src.to_string()
    }
}
