//! Article listing model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::frontmatter::{Document, FieldValue};
use crate::helpers::date;

/// The article manifest: an ordered list of markdown filenames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub articles: Vec<String>,
}

/// Listing metadata for one article, assembled from its front-matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Manifest filename with the first `.md` removed.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Date string exactly as written in the front-matter.
    pub raw_date: Option<String>,
    /// Short-formatted date for cards ("Jan 11, 2026").
    pub date: String,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    /// Raw `public` field; anything but the literal "false" is public.
    pub public: Option<String>,
}

impl ArticleSummary {
    /// Build a summary from a manifest filename and its parsed document.
    pub fn from_document(filename: &str, doc: &Document) -> Self {
        let raw_date = doc.scalar("date").map(str::to_string);
        Self {
            slug: filename.replacen(".md", "", 1),
            title: doc.scalar("title").unwrap_or("Untitled").to_string(),
            excerpt: doc.scalar("excerpt").unwrap_or_default().to_string(),
            date: raw_date
                .as_deref()
                .map(date::format_short)
                .unwrap_or_default(),
            raw_date,
            read_time: doc.scalar("readTime").map(str::to_string),
            tags: tags_field(doc),
            public: doc.scalar("public").map(str::to_string),
        }
    }

    pub fn is_public(&self) -> bool {
        self.public.as_deref() != Some("false")
    }

    /// The card meta line: "Jan 11, 2026 · 5 min read".
    pub fn meta_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.date.is_empty() {
            parts.push(self.date.clone());
        }
        if let Some(read_time) = &self.read_time {
            parts.push(format!("{} min read", read_time));
        }
        parts.join(" · ")
    }
}

/// Tags for a document: `Tags` takes precedence over `tags`, and a scalar
/// value becomes a single-element list.
pub fn tags_field(doc: &Document) -> Vec<String> {
    for key in ["Tags", "tags"] {
        match doc.frontmatter.get(key) {
            Some(FieldValue::List(items)) => return items.clone(),
            Some(FieldValue::Scalar(s)) => return vec![s.clone()],
            None => {}
        }
    }
    Vec::new()
}

/// Filter out non-public articles and sort newest first. Articles without
/// a date sort last; dates that fail to parse keep their relative order
/// (the sort is stable).
pub fn visible(articles: &[ArticleSummary]) -> Vec<ArticleSummary> {
    let mut shown: Vec<ArticleSummary> = articles
        .iter()
        .filter(|a| a.is_public())
        .cloned()
        .collect();

    shown.sort_by(|a, b| match (&a.raw_date, &b.raw_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match (date::parse(x), date::parse(y)) {
            (Some(dx), Some(dy)) => dy.cmp(&dx),
            _ => Ordering::Equal,
        },
    });

    shown
}
