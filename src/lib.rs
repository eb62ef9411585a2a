//! inkpress: a markdown blog engine
//!
//! Loads articles listed in a JSON manifest, parses their front-matter,
//! caches fetched content with a per-entry TTL, and renders listing and
//! article pages.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod seo;
pub mod templates;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cache::{Cache, DiskStorage};
use content::ArticleStore;
use theme::ThemePreference;

/// The blog application: configuration plus resolved directories, and the
/// shared storage medium behind the cache and the theme preference.
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding manifest.json and article files
    pub articles_dir: PathBuf,
    /// Directory backing the persistent cache
    pub cache_dir: PathBuf,
    storage: Arc<DiskStorage>,
}

impl Blog {
    /// Create a blog rooted at `base_dir`, reading `blog.yml` if present.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let articles_dir = base_dir.join(&config.articles_dir);
        let cache_dir = base_dir.join(&config.cache_dir);
        let storage = Arc::new(DiskStorage::new(&cache_dir));

        Ok(Self {
            config,
            base_dir,
            articles_dir,
            cache_dir,
            storage,
        })
    }

    /// Cache-backed article store over the articles directory.
    pub fn store(&self) -> ArticleStore<Arc<DiskStorage>> {
        ArticleStore::new(
            &self.articles_dir,
            Cache::new(Arc::clone(&self.storage)),
            self.config.cache_ttl_minutes,
        )
    }

    /// Persisted theme preference, sharing the storage medium.
    pub fn theme(&self) -> ThemePreference<Arc<DiskStorage>> {
        ThemePreference::new(Arc::clone(&self.storage))
    }
}
