//! Drop cached article entries

use anyhow::Result;

use crate::Blog;

/// Clear the cached listing and every cached article body.
pub async fn run(blog: &Blog) -> Result<()> {
    blog.store().purge().await?;
    tracing::info!("Cleared cached entries under {:?}", blog.cache_dir);
    Ok(())
}
