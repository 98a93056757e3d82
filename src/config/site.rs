//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("ghost.url is not set")]
    MissingUrl,

    #[error("ghost.url must be an http(s) URL, got {0:?}")]
    InvalidUrl(String),

    #[error("ghost.key is not set")]
    MissingKey,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Remote content
    pub ghost: GhostConfig,

    // Components
    pub theme: ButtonTheme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            url: "http://example.com".to_string(),
            ghost: GhostConfig::default(),
            theme: ButtonTheme::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Ghost Content API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Base URL of the Ghost install, e.g. `https://blog.example.com`
    pub url: String,
    /// Content API key
    pub key: String,
    /// API version, `v3` unless configured
    pub version: String,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            version: "v3".to_string(),
        }
    }
}

impl GhostConfig {
    /// Check that the endpoint and key are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        match url::Url::parse(&self.url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidUrl(self.url.clone())),
        }
        if self.key.trim().is_empty() {
            return Err(ConfigError::MissingKey);
        }
        Ok(())
    }
}

/// Palette used by the button stylesheet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonTheme {
    pub text: String,
    pub grey: String,
    pub background: String,
    pub white: String,
    pub black: String,
    /// Minimum viewport width (px) at which hover styling applies
    pub hover_breakpoint: u32,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            text: "#222222".to_string(),
            grey: "#9a9a9a".to_string(),
            background: "#fafafa".to_string(),
            white: "#ffffff".to_string(),
            black: "#000000".to_string(),
            hover_breakpoint: 700,
        }
    }
}
