//! Scraper configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the table scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Page carrying the collateral adjectives table.
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://en.wikipedia.org/wiki/List_of_animal_names".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScraperConfig::default();
        assert!(config.url.ends_with("List_of_animal_names"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_deserialize_override() {
        let toml = r#"
            url = "https://example.org/animals"
            timeout_secs = 20
        "#;
        let config: ScraperConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.url, "https://example.org/animals");
        assert_eq!(config.timeout_secs, 20);
    }
}
