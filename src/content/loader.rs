//! Article loading with cache-first reads
//!
//! Articles live in a directory listed by a `manifest.json`. Every read
//! goes through the TTL cache: the assembled listing under one key, each
//! raw article body under its own. Cache trouble is never an error, it
//! only means a miss and a fresh read.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinSet;

use super::article::{ArticleSummary, Manifest};
use super::frontmatter;
use crate::cache::{Cache, Storage};

/// Cache key for the assembled article listing.
const LIST_CACHE_KEY: &str = "articles_list";

/// Errors from manifest and article reads.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),
    #[error("failed to read article {filename}: {source}")]
    ArticleRead {
        filename: String,
        source: std::io::Error,
    },
    #[error("article load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Cache-wrapped access to a directory of markdown articles.
pub struct ArticleStore<S> {
    articles_dir: PathBuf,
    cache: Cache<S>,
    ttl_minutes: i64,
}

impl<S: Storage> ArticleStore<S> {
    pub fn new<P: AsRef<Path>>(articles_dir: P, cache: Cache<S>, ttl_minutes: i64) -> Self {
        Self {
            articles_dir: articles_dir.as_ref().to_path_buf(),
            cache,
            ttl_minutes,
        }
    }

    fn article_cache_key(slug: &str) -> String {
        format!("article_{}", slug)
    }

    /// Read and parse `manifest.json`.
    pub async fn manifest(&self) -> Result<Manifest, LoadError> {
        let path = self.articles_dir.join("manifest.json");
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::ManifestRead {
                path: path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The article listing, cache-first. On a miss every listed article
    /// is loaded concurrently and one failed read fails the whole
    /// listing. Summaries keep manifest order; filtering and sorting
    /// happen at render time.
    pub async fn summaries(&self) -> Result<Vec<ArticleSummary>, LoadError> {
        if let Some(cached) = self.cache.get::<Vec<ArticleSummary>>(LIST_CACHE_KEY) {
            tracing::debug!("article listing served from cache");
            return Ok(cached);
        }

        let manifest = self.manifest().await?;

        let mut set = JoinSet::new();
        for (index, filename) in manifest.articles.iter().enumerate() {
            let path = self.articles_dir.join(filename);
            let filename = filename.clone();
            set.spawn(async move {
                let content = tokio::fs::read_to_string(&path).await.map_err(|source| {
                    LoadError::ArticleRead {
                        filename: filename.clone(),
                        source,
                    }
                })?;
                Ok::<_, LoadError>((index, filename, content))
            });
        }

        let mut summaries: Vec<Option<ArticleSummary>> = vec![None; manifest.articles.len()];
        while let Some(joined) = set.join_next().await {
            let (index, filename, content) = joined??;
            let doc = frontmatter::parse(&content);
            summaries[index] = Some(ArticleSummary::from_document(&filename, &doc));
        }
        let summaries: Vec<ArticleSummary> = summaries.into_iter().flatten().collect();

        self.cache
            .set_with_ttl(LIST_CACHE_KEY, &summaries, self.ttl_minutes);
        Ok(summaries)
    }

    /// Raw markdown for one article, cache-first.
    pub async fn content(&self, slug: &str) -> Result<String, LoadError> {
        let key = Self::article_cache_key(slug);
        if let Some(cached) = self.cache.get::<String>(&key) {
            tracing::debug!("article {:?} served from cache", slug);
            return Ok(cached);
        }

        let filename = format!("{}.md", slug);
        let path = self.articles_dir.join(&filename);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::ArticleRead { filename, source })?;

        self.cache.set_with_ttl(&key, &content, self.ttl_minutes);
        Ok(content)
    }

    /// Drop the cached listing and every cached article body named by the
    /// manifest. Per-key removal only; the cache has no clear-all.
    pub async fn purge(&self) -> Result<(), LoadError> {
        self.cache.clear(LIST_CACHE_KEY);
        let manifest = self.manifest().await?;
        for filename in &manifest.articles {
            let slug = filename.replacen(".md", "", 1);
            self.cache.clear(&Self::article_cache_key(&slug));
        }
        Ok(())
    }
}
