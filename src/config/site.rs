//! Site configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Blog configuration with defaults matching the stock reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, also the suffix on article page titles.
    pub title: String,
    pub description: String,
    /// Base URL used for canonical article links.
    pub url: String,

    /// Directory holding `manifest.json` and the article files.
    pub articles_dir: String,
    /// Directory backing the persistent cache.
    pub cache_dir: String,
    /// Lifetime of cached listings and article bodies.
    pub cache_ttl_minutes: i64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            url: "http://localhost".to_string(),
            articles_dir: "articles".to_string(),
            cache_dir: ".inkpress-cache".to_string(),
            cache_ttl_minutes: 30,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
