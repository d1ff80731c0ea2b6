//! Runtime configuration for the feed pipeline and its collaborators.
//!
//! All fixed constants of the system (URLs, User-Agent, file paths, cache
//! validity window, update interval, server port) live in [`FeedConfig`],
//! which is built once in `main` and passed by reference into every
//! component. A YAML file given via `--config` can override any subset of
//! the defaults.

use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Configuration for one invocation of the tool.
///
/// Every field has a default matching the production NPO setup, so an empty
/// or absent config file yields a fully working configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Root URL that is scraped and that relative links are resolved against.
    pub base_url: String,
    /// Channel link of the generated feed.
    pub start_url: String,
    /// User-Agent header sent with the scrape request.
    pub user_agent: String,
    /// Path of the generated RSS artifact.
    pub feed_file: PathBuf,
    /// Path of the persisted program cache.
    pub cache_file: PathBuf,
    /// Seconds after which a cache entry is considered stale.
    pub cache_expiry_secs: u64,
    /// Seconds between pipeline runs in watch mode.
    pub update_interval_secs: u64,
    /// Port the static feed server binds to.
    pub port: u16,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://npo.nl/".to_string(),
            start_url: "https://npo.nl/start".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            feed_file: PathBuf::from("npo_new_programs.xml"),
            cache_file: PathBuf::from("npo_programs_cache.json"),
            cache_expiry_secs: 3600,
            update_interval_secs: 3600,
            port: 8000,
        }
    }
}

/// Load configuration from an optional YAML file.
///
/// With no path the defaults are returned unchanged. Unknown keys in the
/// file are rejected so that typos do not silently fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<FeedConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&raw)?)
        }
        None => Ok(FeedConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_setup() {
        let config = FeedConfig::default();
        assert_eq!(config.base_url, "https://npo.nl/");
        assert_eq!(config.start_url, "https://npo.nl/start");
        assert_eq!(config.feed_file, PathBuf::from("npo_new_programs.xml"));
        assert_eq!(config.cache_file, PathBuf::from("npo_programs_cache.json"));
        assert_eq!(config.cache_expiry_secs, 3600);
        assert_eq!(config.update_interval_secs, 3600);
        assert_eq!(config.port, 8000);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(!config.user_agent.contains("  "));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: FeedConfig =
            serde_yaml::from_str("port: 9000\nfeed_file: out/feed.xml\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.feed_file, PathBuf::from("out/feed.xml"));
        assert_eq!(config.cache_expiry_secs, 3600);
        assert_eq!(config.base_url, "https://npo.nl/");
    }

    #[test]
    fn test_unknown_yaml_key_is_rejected() {
        let parsed: Result<FeedConfig, _> = serde_yaml::from_str("prot: 9000\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/config.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_config_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.port, FeedConfig::default().port);
    }
}
