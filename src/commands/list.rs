//! List visible articles

use anyhow::Result;

use crate::content::article;
use crate::Blog;

/// Print the visible article listing, newest first.
pub async fn run(blog: &Blog) -> Result<()> {
    let summaries = blog.store().summaries().await?;
    let shown = article::visible(&summaries);

    println!("Articles ({}):", shown.len());
    for article in &shown {
        let date = if article.date.is_empty() {
            "no date"
        } else {
            article.date.as_str()
        };
        if article.tags.is_empty() {
            println!("  {} - {} [{}]", date, article.title, article.slug);
        } else {
            println!(
                "  {} - {} [{}] ({})",
                date,
                article.title,
                article.slug,
                article.tags.join(", ")
            );
        }
    }

    Ok(())
}
