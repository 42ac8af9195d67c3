//! Kit configuration
//!
//! Configuration can be built in code or loaded from JSON. Every field has a
//! default, so a partial document such as `{"fonts": {"platform": "tvos"}}`
//! is valid.

use cache::CacheConfig;
use fonts::{FontConfig, Platform};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration for a [`crate::KitContext`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Font resolution settings
    pub fonts: FontConfig,
    /// Resolved color cache settings
    pub color_cache: CacheConfig,
    /// Resolved font cache settings
    pub font_cache: CacheConfig,
}

impl KitConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded kit config");
        Ok(config)
    }

    /// Set the platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.fonts.platform = platform;
        self
    }

    /// Set the default font directory
    pub fn font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts.font_dir = dir.into();
        self
    }

    /// Bound the color cache
    pub fn color_cache(mut self, config: CacheConfig) -> Self {
        self.color_cache = config;
        self
    }

    /// Bound the font cache
    pub fn font_cache(mut self, config: CacheConfig) -> Self {
        self.font_cache = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KitConfig::new();
        assert_eq!(config.fonts.platform, Platform::Ios);
        assert_eq!(config.fonts.extensions, vec!["ttf", "otf"]);
        assert_eq!(config.color_cache.max_entries, None);
        assert_eq!(config.font_cache.max_entries, None);
    }

    #[test]
    fn test_builder() {
        let config = KitConfig::new()
            .platform(Platform::Watchos)
            .font_dir("/app/fonts")
            .color_cache(CacheConfig::new().max_entries(256));

        assert_eq!(config.fonts.platform, Platform::Watchos);
        assert_eq!(config.fonts.font_dir, PathBuf::from("/app/fonts"));
        assert_eq!(config.color_cache.max_entries, Some(256));
    }

    #[test]
    fn test_partial_json() {
        let config =
            KitConfig::from_json_str(r#"{"fonts":{"platform":"tvos"},"font_cache":{"max_entries":8}}"#)
                .unwrap();

        assert_eq!(config.fonts.platform, Platform::Tvos);
        assert_eq!(config.fonts.font_dir, PathBuf::from("fonts"));
        assert_eq!(config.font_cache.max_entries, Some(8));
        assert_eq!(config.color_cache.max_entries, None);
    }

    #[test]
    fn test_invalid_json() {
        let result = KitConfig::from_json_str(r#"{"fonts":{"platform":"android"}}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = KitConfig::from_file("/nonexistent/umkit.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
