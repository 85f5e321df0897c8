//! Local image cache lookup.
//!
//! The cache has no index; a file whose basename starts with the sanitized
//! name prefix is the authoritative entry. The probe runs before any network
//! call, so an already-downloaded image costs one directory listing.

use std::path::{Path, PathBuf};

use super::filename::sanitize_prefix;

/// Return the first cached file for `name`, if any.
///
/// Directory listing order is unspecified; with duplicate-prefix collisions
/// the winner is arbitrary. A missing cache directory is treated as a miss.
pub(crate) fn probe(cache_dir: &Path, name: &str) -> Option<PathBuf> {
    let prefix = sanitize_prefix(name);
    // An empty prefix would match every file in the directory.
    if prefix.is_empty() {
        return None;
    }

    let entries = std::fs::read_dir(cache_dir).ok()?;
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with(&prefix) {
            return Some(cache_dir.join(file_name));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_hit() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("red_fox.jpg"), b"x").unwrap();

        let hit = probe(dir.path(), "Red Fox").unwrap();
        assert_eq!(hit, dir.path().join("red_fox.jpg"));
    }

    #[test]
    fn test_probe_matches_on_prefix_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("red_fox.svg.png"), b"x").unwrap();

        assert!(probe(dir.path(), "Red Fox").is_some());
    }

    #[test]
    fn test_probe_miss() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("arctic_fox.jpg"), b"x").unwrap();

        assert!(probe(dir.path(), "Red Fox").is_none());
    }

    #[test]
    fn test_probe_empty_prefix_never_matches() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("anything.jpg"), b"x").unwrap();

        assert!(probe(dir.path(), "!!!").is_none());
    }

    #[test]
    fn test_probe_missing_directory_is_a_miss() {
        assert!(probe(Path::new("/nonexistent/cache"), "Red Fox").is_none());
    }
}
