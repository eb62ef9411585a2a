//! Render the listing page or a single article page to HTML

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{article, frontmatter, MarkdownRenderer};
use crate::helpers::date;
use crate::seo::PageMeta;
use crate::templates::{ArticlePageData, CardData, TemplateRenderer};
use crate::theme::Theme;
use crate::Blog;

/// Render the article page for `slug`, or the listing page without one,
/// to stdout or to `output`.
pub async fn run(blog: &Blog, slug: Option<&str>, output: Option<&Path>) -> Result<()> {
    let theme = blog.theme().load();
    let templates = TemplateRenderer::new()?;

    let html = match slug {
        Some(slug) => render_article(blog, &templates, slug, theme).await?,
        None => render_listing(blog, &templates, theme).await?,
    };

    match output {
        Some(path) => {
            fs::write(path, &html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}

async fn render_listing(
    blog: &Blog,
    templates: &TemplateRenderer,
    theme: Theme,
) -> Result<String> {
    let summaries = blog.store().summaries().await?;
    let cards: Vec<CardData> = article::visible(&summaries)
        .iter()
        .map(CardData::from)
        .collect();
    let head = PageMeta::for_listing(&blog.config);
    templates.render_listing(&blog.config.title, &head, &cards, theme)
}

async fn render_article(
    blog: &Blog,
    templates: &TemplateRenderer,
    slug: &str,
    theme: Theme,
) -> Result<String> {
    let content = blog.store().content(slug).await?;
    let doc = frontmatter::parse(&content);

    let mut meta_parts = Vec::new();
    if let Some(raw) = doc.scalar("date") {
        let formatted = date::format_long(raw);
        if !formatted.is_empty() {
            meta_parts.push(formatted);
        }
    }
    if let Some(read_time) = doc.scalar("readTime") {
        meta_parts.push(format!("{} min read", read_time));
    }

    let page = ArticlePageData {
        title: doc.scalar("title").unwrap_or("Untitled").to_string(),
        excerpt: doc.scalar("excerpt").unwrap_or_default().to_string(),
        meta: meta_parts.join(" · "),
        tags: article::tags_field(&doc),
        body: MarkdownRenderer::new().render(&doc.body),
    };
    let head = PageMeta::for_article(&doc, &blog.config, slug);
    templates.render_article(&head, &page, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site(dir: &Path) {
        let articles = dir.join("articles");
        fs::create_dir_all(&articles).unwrap();
        fs::write(
            articles.join("manifest.json"),
            "{\"articles\": [\"hello.md\"]}",
        )
        .unwrap();
        fs::write(
            articles.join("hello.md"),
            "---\ntitle: Hello\nexcerpt: Intro\ndate: 2026-01-11\nreadTime: 5\ntags:\n  - rust\n---\n# Heading\n\nBody text.\n",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_render_article_page() {
        let tmp = tempfile::tempdir().unwrap();
        site(tmp.path());
        let blog = Blog::new(tmp.path()).unwrap();
        let templates = TemplateRenderer::new().unwrap();

        let html = render_article(&blog, &templates, "hello", Theme::Dark)
            .await
            .unwrap();
        assert!(html.contains("<title>Hello | Blog</title>"));
        assert!(html.contains("January 11, 2026 · 5 min read"));
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<span>rust</span>"));
    }

    #[tokio::test]
    async fn test_render_listing_page() {
        let tmp = tempfile::tempdir().unwrap();
        site(tmp.path());
        let blog = Blog::new(tmp.path()).unwrap();
        let templates = TemplateRenderer::new().unwrap();

        let html = render_listing(&blog, &templates, Theme::Dark).await.unwrap();
        assert!(html.contains("article.html?slug=hello"));
        assert!(html.contains("Jan 11, 2026 · 5 min read"));
    }

    #[tokio::test]
    async fn test_run_writes_output_file() {
        let tmp = tempfile::tempdir().unwrap();
        site(tmp.path());
        let blog = Blog::new(tmp.path()).unwrap();
        let out = tmp.path().join("hello.html");

        run(&blog, Some("hello"), Some(out.as_path())).await.unwrap();
        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("Hello"));
    }
}
