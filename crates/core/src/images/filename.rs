//! Deterministic, filesystem-safe image filenames.
//!
//! The sanitized prefix doubles as the cache key: files are both named and
//! probed by it, so the transform must stay stable across runs.

/// Derive the cache filename prefix from an animal name.
///
/// Lowercases, trims, collapses whitespace runs into a single `_` and drops
/// every character outside alphanumerics, `_` and `-`. Idempotent. Two
/// distinct names can sanitize identically; that collision is an accepted
/// trade-off of the lossy transform.
pub fn sanitize_prefix(name: &str) -> String {
    let lowered = name.to_lowercase();
    let joined = lowered.split_whitespace().collect::<Vec<_>>().join("_");
    joined
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Build the full cache filename for an animal name and image URL.
///
/// The extension is taken from the URL's path component, defaulting to
/// `.jpg` when the path has none.
pub fn build_filename(name: &str, image_url: &str) -> String {
    format!("{}{}", sanitize_prefix(name), extension_of(image_url))
}

fn extension_of(image_url: &str) -> String {
    let path = match url::Url::parse(image_url) {
        Ok(u) => u.path().to_string(),
        Err(_) => image_url.to_string(),
    };
    let basename = path.rsplit('/').next().unwrap_or("");
    match basename.rfind('.') {
        // A leading dot is a hidden file, not an extension.
        Some(idx) if idx > 0 => basename[idx..].to_string(),
        _ => ".jpg".to_string(),
    }
}
