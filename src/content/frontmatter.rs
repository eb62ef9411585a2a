//! Front-matter parsing
//!
//! A document may open with a metadata block delimited by dash lines,
//! holding `key: value` pairs and indented `- item` lists. Parsing is
//! total: anything that does not match the block shape degrades to an
//! empty mapping with the whole text as body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A front-matter field value: a plain string or a list of strings.
/// Values are never coerced; numbers and booleans stay strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }
}

/// Parse result: the field mapping plus the remaining body text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub frontmatter: HashMap<String, FieldValue>,
    pub body: String,
}

impl Document {
    /// Look up a scalar field.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.frontmatter.get(key).and_then(FieldValue::as_str)
    }

    /// Look up a list field.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.frontmatter.get(key).and_then(FieldValue::as_list)
    }
}

/// Parse a document into front-matter fields and body. Never fails: with
/// no leading delimiter block the mapping is empty and the body is the
/// whole text, normalized to `\n` line endings.
pub fn parse(content: &str) -> Document {
    let normalized = normalize_newlines(content);

    match split_block(&normalized) {
        Some((block, body)) => Document {
            frontmatter: parse_block(block),
            body: body.to_string(),
        },
        None => Document {
            frontmatter: HashMap::new(),
            body: normalized,
        },
    }
}

/// Normalize `\r\n` and bare `\r` to `\n` so line matching is
/// CRLF-agnostic.
fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// A delimiter line: two or three dashes, then only spaces or tabs.
fn is_delimiter(line: &str) -> bool {
    let dashes = line.bytes().take_while(|&b| b == b'-').count();
    (2..=3).contains(&dashes)
        && line.as_bytes()[dashes..]
            .iter()
            .all(|&b| b == b' ' || b == b'\t')
}

/// Split off the leading block: an opening delimiter line, the smallest
/// run of text up to the first closing delimiter line, and the body after
/// it. The closing line must itself be newline-terminated; opening and
/// closing dash counts are independent. Returns `(block, body)`.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let open_end = text.find('\n')?;
    if !is_delimiter(&text[..open_end]) {
        return None;
    }

    // Walk candidate newlines that could precede the closing delimiter
    // line. The block may be empty (a blank line directly between the
    // delimiters).
    let mut search = open_end + 1;
    while let Some(offset) = text[search..].find('\n') {
        let nl = search + offset;
        let rest = &text[nl + 1..];
        match rest.find('\n') {
            Some(line_end) if is_delimiter(&rest[..line_end]) => {
                return Some((&text[open_end + 1..nl], &rest[line_end + 1..]));
            }
            Some(_) => search = nl + 1,
            // The only remaining candidate line is unterminated, so the
            // block never closes.
            None => return None,
        }
    }
    None
}

/// Parser mode while walking block lines. `Appending` names the key whose
/// list receives subsequent `- item` lines; ignored lines leave it intact,
/// so junk between list items does not break the list.
enum Mode {
    Flat,
    Appending(String),
}

/// Classified block line.
enum LineKind {
    /// Indented `- item` line; carries the trimmed remainder.
    Item(String),
    /// `key: value` line; the value is trimmed and may be empty.
    Key(String, String),
    Ignored,
}

fn classify(line: &str) -> LineKind {
    // List items require at least one leading whitespace character before
    // the dash; an unindented dash line is ignored.
    let stripped = line.trim_start();
    if stripped.len() < line.len() {
        if let Some(rest) = stripped.strip_prefix('-') {
            return LineKind::Item(rest.trim().to_string());
        }
        return LineKind::Ignored;
    }

    if let Some(colon) = line.find(':') {
        let key = &line[..colon];
        if is_identifier(key) {
            let value = line[colon + 1..].trim().to_string();
            return LineKind::Key(key.to_string(), value);
        }
    }

    LineKind::Ignored
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_block(block: &str) -> HashMap<String, FieldValue> {
    let mut fields = HashMap::new();
    let mut mode = Mode::Flat;

    for line in block.split('\n') {
        match classify(line) {
            LineKind::Item(value) => {
                if let Mode::Appending(key) = &mode {
                    if let Some(FieldValue::List(items)) = fields.get_mut(key.as_str()) {
                        items.push(value);
                    }
                }
            }
            LineKind::Key(key, value) => {
                if value.is_empty() {
                    // An empty value declares a list key. It stays a list
                    // even if no items ever follow.
                    fields.insert(key.clone(), FieldValue::List(Vec::new()));
                    mode = Mode::Appending(key);
                } else {
                    fields.insert(key, FieldValue::Scalar(value));
                    mode = Mode::Flat;
                }
            }
            LineKind::Ignored => {}
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(doc: &Document, key: &str) -> String {
        doc.scalar(key).expect("scalar field").to_string()
    }

    #[test]
    fn test_no_frontmatter() {
        let doc = parse("Just a markdown document.\n\n# Heading\n");
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "Just a markdown document.\n\n# Heading\n");
    }

    #[test]
    fn test_basic_block() {
        let doc = parse("---\ntitle: Hello World\ndate: 2026-01-11\n---\nBODY");
        assert_eq!(scalar(&doc, "title"), "Hello World");
        assert_eq!(scalar(&doc, "date"), "2026-01-11");
        assert_eq!(doc.body, "BODY");
    }

    #[test]
    fn test_list_field() {
        let doc = parse("---\ntags:\n  - a\n  - b\n---\nX");
        assert_eq!(
            doc.list("tags"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(doc.body, "X");
    }

    #[test]
    fn test_list_survives_ignored_lines() {
        let doc = parse("---\ntags:\n  - a\n???\n  - b\n---\n");
        assert_eq!(
            doc.list("tags"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_empty_value_stays_list() {
        // A key with an empty value is always a list, even when nothing
        // follows it.
        let doc = parse("---\ntags:\nnext: value\n---\n");
        assert_eq!(doc.list("tags"), Some(&[][..]));
        assert_eq!(scalar(&doc, "next"), "value");
    }

    #[test]
    fn test_scalar_clears_list_cursor() {
        let doc = parse("---\ntags:\n  - a\nother: x\n  - stray\n---\n");
        assert_eq!(doc.list("tags"), Some(&["a".to_string()][..]));
        assert_eq!(scalar(&doc, "other"), "x");
    }

    #[test]
    fn test_orphan_list_item_ignored() {
        let doc = parse("---\n  - nobody\ntitle: t\n---\n");
        assert_eq!(scalar(&doc, "title"), "t");
        assert_eq!(doc.frontmatter.len(), 1);
    }

    #[test]
    fn test_unindented_dash_is_not_an_item() {
        let doc = parse("---\ntags:\n- a\n---\n");
        assert_eq!(doc.list("tags"), Some(&[][..]));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let doc = parse("---\ntitle: first\ntitle: second\n---\n");
        assert_eq!(scalar(&doc, "title"), "second");
    }

    #[test]
    fn test_values_stay_strings() {
        let doc = parse("---\ncount: 42\ndraft: true\n---\n");
        assert_eq!(scalar(&doc, "count"), "42");
        assert_eq!(scalar(&doc, "draft"), "true");
    }

    #[test]
    fn test_mixed_delimiter_lengths() {
        let doc = parse("--\nkey: v\n---\nB");
        assert_eq!(scalar(&doc, "key"), "v");
        assert_eq!(doc.body, "B");

        let doc = parse("---  \nkey: v\n-- \t\nB");
        assert_eq!(scalar(&doc, "key"), "v");
        assert_eq!(doc.body, "B");
    }

    #[test]
    fn test_four_dashes_is_not_a_delimiter() {
        let input = "----\nkey: v\n----\nB";
        let doc = parse(input);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_unterminated_block() {
        // The closing delimiter must itself end with a newline.
        let input = "---\nkey: v\n---";
        let doc = parse(input);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_adjacent_delimiters_do_not_match() {
        // There is no newline-separated block between the delimiters.
        let input = "---\n---\nbody";
        let doc = parse(input);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_blank_block() {
        let doc = parse("---\n\n---\nbody");
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_crlf_normalization() {
        let crlf = parse("---\r\nkey: v\r\n---\r\nB");
        let lf = parse("---\nkey: v\n---\nB");
        assert_eq!(crlf, lf);
        assert_eq!(crlf.body, "B");
    }

    #[test]
    fn test_bare_cr_normalization() {
        let doc = parse("---\rkey: v\r---\rB");
        assert_eq!(scalar(&doc, "key"), "v");
        assert_eq!(doc.body, "B");
    }

    #[test]
    fn test_reparse_body_is_stable() {
        let doc = parse("---\ntitle: t\n---\nplain body\nwith lines\n");
        let again = parse(&doc.body);
        assert!(again.frontmatter.is_empty());
        assert_eq!(again.body, doc.body);
    }

    #[test]
    fn test_invalid_key_lines_ignored() {
        let doc = parse("---\n1bad: x\nbad key: y\n: z\nok: fine\n---\n");
        assert_eq!(doc.frontmatter.len(), 1);
        assert_eq!(scalar(&doc, "ok"), "fine");
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let doc = parse("---\nlink: https://example.com/a:b\n---\n");
        assert_eq!(scalar(&doc, "link"), "https://example.com/a:b");
    }

    #[test]
    fn test_item_whitespace_trimmed() {
        let doc = parse("---\ntags:\n\t-   spaced out  \n---\n");
        assert_eq!(doc.list("tags"), Some(&["spaced out".to_string()][..]));
    }
}
