//! SEO metadata overlay for rendered pages
//!
//! Builds the head tags the reader injects per article: page title,
//! description, Open Graph, and Twitter Card.

use crate::config::SiteConfig;
use crate::content::frontmatter::Document;

/// Head metadata for one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Document title ("{title} | {site title}").
    pub page_title: String,
    /// Plain title for `og:` and `twitter:` tags.
    pub title: String,
    pub description: String,
    pub url: String,
    /// `og:type` value.
    pub kind: &'static str,
}

impl PageMeta {
    /// Metadata for an article page, with the reader's fallbacks: a
    /// missing title becomes "Article", a missing excerpt an empty
    /// description.
    pub fn for_article(doc: &Document, config: &SiteConfig, slug: &str) -> Self {
        let title = doc.scalar("title").unwrap_or("Article");
        let excerpt = doc.scalar("excerpt").unwrap_or_default();
        Self {
            page_title: format!("{} | {}", title, config.title),
            title: title.to_string(),
            description: excerpt.to_string(),
            url: article_url(config, slug),
            kind: "article",
        }
    }

    /// Metadata for the listing page.
    pub fn for_listing(config: &SiteConfig) -> Self {
        Self {
            page_title: config.title.clone(),
            title: config.title.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            kind: "website",
        }
    }

    /// Render the head tags, attribute values escaped.
    pub fn render_head(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("<title>{}</title>\n", escape(&self.page_title)));
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape(&self.description)
        ));

        let og = [
            ("og:title", self.title.as_str()),
            ("og:description", self.description.as_str()),
            ("og:type", self.kind),
            ("og:url", self.url.as_str()),
        ];
        for (property, content) in og {
            out.push_str(&format!(
                "<meta property=\"{}\" content=\"{}\">\n",
                property,
                escape(content)
            ));
        }

        let twitter = [
            ("twitter:card", "summary"),
            ("twitter:title", self.title.as_str()),
            ("twitter:description", self.description.as_str()),
        ];
        for (name, content) in twitter {
            out.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                name,
                escape(content)
            ));
        }

        out
    }
}

/// Canonical URL for an article page.
fn article_url(config: &SiteConfig, slug: &str) -> String {
    format!(
        "{}/article.html?slug={}",
        config.url.trim_end_matches('/'),
        slug
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
