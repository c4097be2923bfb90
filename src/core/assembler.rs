//! Document assembly: title derivation, body cleanup, search fields.
//!
//! Turns a parsed document into an output-ready record (minus the
//! partition id, which is assigned after ordering). The title falls
//! back through frontmatter fields to the filename; bodies get a
//! second-chance frontmatter strip and image-markup removal before
//! tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::datefmt;
use crate::core::tokenizer;
use crate::core::types::ParsedDocument;

/// Markdown image tokens `![alt](url)`, removed entirely
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("invalid image regex"));

/// Directory levels consumed by the numeric-title fallback
///
/// The archive lays numerically-named documents out three levels
/// deep (year/month/day); shallower numeric stems keep their bare
/// name.
const TITLE_PATH_SEGMENTS: usize = 3;

/// An output record before partition ids are assigned
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    /// Derived display title
    pub title: String,

    /// Raw frontmatter date, used for ordering
    pub raw_date: String,

    /// Normalized display date
    pub display_date: String,

    /// Resolved tags
    pub tags: Vec<String>,

    /// Cleaned body text
    pub content: String,

    /// Whether the document belongs to the reply partition
    pub reply: bool,
}

/// Assemble a parsed document into an output-ready record
pub fn assemble(doc: &ParsedDocument) -> AssembledDocument {
    let raw_date = doc.frontmatter.date().unwrap_or("").to_string();

    AssembledDocument {
        title: derive_title(doc),
        display_date: datefmt::normalize_display_date(&raw_date),
        raw_date,
        tags: doc.frontmatter.tags().to_vec(),
        content: clean_body(&doc.body),
        reply: doc.frontmatter.is_reply(),
    }
}

/// Derive the display title
///
/// Priority: frontmatter `id`, frontmatter `title`, filename without
/// extension. A purely numeric filename under the dated directory
/// convention is prefixed with the first three path segments, so
/// `2025/09/06/115.md` titles as `2025/09/06/115`.
pub fn derive_title(doc: &ParsedDocument) -> String {
    if let Some(id) = doc.frontmatter.id() {
        return id.to_string();
    }

    if let Some(title) = doc.frontmatter.title() {
        return title.to_string();
    }

    let stem = doc
        .relative_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if is_numeric(&stem) {
        let dirs: Vec<String> = doc
            .relative_path
            .parent()
            .map(|p| {
                p.iter()
                    .map(|c| c.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        if dirs.len() >= TITLE_PATH_SEGMENTS {
            let mut parts = dirs[..TITLE_PATH_SEGMENTS].to_vec();
            parts.push(stem);
            return parts.join("/");
        }
    }

    stem
}

/// Clean a body for output
///
/// Trims, strips a residual leading metadata block if one survived
/// parsing, and removes every markdown image token (alt text is
/// discarded, not retained).
pub fn clean_body(body: &str) -> String {
    let mut content = body.trim().to_string();

    if content.starts_with("---") {
        if let Some(end) = content[3..].find("---") {
            content = content[3 + end + 3..].trim().to_string();
        }
    }

    IMAGE_RE.replace_all(&content, "").into_owned()
}

/// Space-joined deduplicated tokens for the cleaned content
pub fn search_content(content: &str) -> String {
    tokenizer::tokenize_joined(content)
}

/// Space-joined deduplicated tokens for the tag list
///
/// `None` when there are no tags, so the field is omitted from the
/// output record.
pub fn search_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(tokenizer::tokenize_joined(&tags.join(" ")))
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
