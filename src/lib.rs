//! folio-rs: building blocks for a Ghost-backed marketing and blog site
//!
//! Provides a button component that renders to HTML and a post feed that
//! loads the blog's posts from a Ghost Content API at build time.

pub mod commands;
pub mod components;
pub mod config;
pub mod feed;
pub mod ghost;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ghost::{GhostClient, GhostError};

/// A site rooted at a directory containing `_config.yml`
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Shared by every feed; read-only once built
    client: std::result::Result<Arc<GhostClient>, Arc<GhostError>>,
}

impl Site {
    /// Create a site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::from_config(config, base_dir))
    }

    /// Create a site from an already loaded configuration
    pub fn from_config(config: config::SiteConfig, base_dir: PathBuf) -> Self {
        let client = GhostClient::new(&config.ghost).map(Arc::new).map_err(|e| {
            tracing::debug!("Ghost client not configured: {}", e);
            Arc::new(e)
        });

        Self {
            config,
            base_dir,
            client,
        }
    }

    /// The process-wide Ghost client
    pub fn client(&self) -> Result<Arc<GhostClient>> {
        match self.client {
            Ok(ref client) => Ok(Arc::clone(client)),
            Err(ref e) => Err(anyhow::anyhow!("Ghost is not configured: {}", e)),
        }
    }

    /// A fresh, unmounted post feed backed by the shared client
    pub fn post_feed(&self) -> Result<feed::PostFeed> {
        let client: Arc<dyn ghost::ContentSource> = self.client()?;
        Ok(feed::PostFeed::new(client))
    }

    /// CSS for the configured button theme
    pub fn button_stylesheet(&self) -> String {
        components::stylesheet(&self.config.theme)
    }
}
