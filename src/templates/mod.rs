//! Embedded page templates
//!
//! The listing and article page markup is compiled into the binary and
//! rendered with Tera. Autoescaping is off: article fields flow into the
//! page the way the reader injected them, and head metadata arrives
//! pre-escaped from the seo module.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::content::ArticleSummary;
use crate::seo::PageMeta;
use crate::theme::Theme;

/// Template renderer with the embedded blog pages.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            ("index.html", include_str!("blog/index.html")),
            ("article.html", include_str!("blog/article.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render the listing page from already filtered and sorted cards.
    pub fn render_listing(
        &self,
        site_title: &str,
        head: &PageMeta,
        articles: &[CardData],
        theme: Theme,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("site_title", site_title);
        context.insert("head_meta", &head.render_head());
        context.insert("articles", articles);
        context.insert("light", &(theme == Theme::Light));
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render a single article page.
    pub fn render_article(
        &self,
        head: &PageMeta,
        article: &ArticlePageData,
        theme: Theme,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("head_meta", &head.render_head());
        context.insert("article", article);
        context.insert("light", &(theme == Theme::Light));
        Ok(self.tera.render("article.html", &context)?)
    }
}

/// Listing card context.
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// "Jan 11, 2026 · 5 min read", possibly empty.
    pub meta: String,
    pub tags: Vec<String>,
}

impl From<&ArticleSummary> for CardData {
    fn from(summary: &ArticleSummary) -> Self {
        Self {
            slug: summary.slug.clone(),
            title: summary.title.clone(),
            excerpt: summary.excerpt.clone(),
            meta: summary.meta_line(),
            tags: summary.tags.clone(),
        }
    }
}

/// Article page context.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePageData {
    pub title: String,
    pub excerpt: String,
    /// Long-format date and read time, possibly empty.
    pub meta: String,
    pub tags: Vec<String>,
    /// Rendered HTML body.
    pub body: String,
}
