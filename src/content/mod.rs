//! Content module - articles, front-matter, and markdown

pub mod article;
pub mod frontmatter;
pub mod loader;
mod markdown;

pub use article::{ArticleSummary, Manifest};
pub use frontmatter::{Document, FieldValue};
pub use loader::{ArticleStore, LoadError};
pub use markdown::MarkdownRenderer;
