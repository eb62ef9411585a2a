//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown renderer configured like the original reader: GFM extensions
/// with single newlines treated as hard breaks.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML. Applied to document bodies only, never to
    /// the front-matter block.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });

        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
