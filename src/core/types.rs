//! Core data types for the mdindex build pipeline.
//!
//! This module defines all data structures used throughout the
//! application: source documents, parsed frontmatter, assembled
//! search records, and run statistics.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A discovered document before any parsing
///
/// Created once per file and owned by the pipeline run.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path relative to the content root
    pub relative_path: PathBuf,

    /// Full raw file contents
    pub raw_text: String,
}

/// A single frontmatter field value
///
/// Closed variant set: frontmatter values are strings, string
/// sequences, or booleans, never arbitrarily-shaped data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    List(Vec<String>),
    Bool(bool),
}

impl FieldValue {
    /// Borrow the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the sequence content, if this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Ordered frontmatter mapping
///
/// Preserves the order fields appear in the metadata block. Lookups
/// are linear; frontmatter blocks are a handful of keys at most.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    fields: Vec<(String, FieldValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The raw `date` value, verbatim as written in the document
    pub fn date(&self) -> Option<&str> {
        self.get("date").and_then(FieldValue::as_str)
    }

    /// The `title` value, if present as a string
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(FieldValue::as_str)
    }

    /// The `id` value, if present as a string
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(FieldValue::as_str)
    }

    /// The `description` value, if present as a string
    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(FieldValue::as_str)
    }

    /// The resolved `tags` sequence, empty when absent
    pub fn tags(&self) -> &[String] {
        self.get("tags")
            .and_then(FieldValue::as_list)
            .unwrap_or(&[])
    }

    /// Whether the document is flagged as a reply
    pub fn is_reply(&self) -> bool {
        self.get("reply")
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }
}

/// A document after frontmatter extraction
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Extracted metadata mapping
    pub frontmatter: Frontmatter,

    /// Body text with the metadata block removed
    pub body: String,

    /// Path relative to the content root
    pub relative_path: PathBuf,
}

impl ParsedDocument {
    /// Relative path rendered with forward slashes
    ///
    /// Output records and titles always use `/` separators,
    /// independent of the platform the build ran on.
    pub fn path_display(&self) -> String {
        path_to_slash(&self.relative_path)
    }
}

/// Render a path with forward-slash separators
pub fn path_to_slash(path: &Path) -> String {
    path.iter()
        .map(|c| c.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// One entry of the emitted search index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Dense zero-based identifier within the output partition
    pub id: usize,

    /// Display title
    pub title: String,

    /// Display date (normalized or verbatim)
    pub date: String,

    /// Tags, omitted entirely when empty to keep the payload small
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Cleaned body text
    pub content: String,

    /// Space-joined deduplicated search tokens for the content
    pub search_content: String,

    /// Space-joined deduplicated search tokens for the tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_tags: Option<String>,
}

/// Statistics from one build run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of files found under the content root
    pub files_discovered: usize,

    /// Number of documents successfully parsed
    pub documents_parsed: usize,

    /// Number of documents dropped due to read/parse failures
    pub documents_skipped: usize,

    /// Records written to the primary partition
    pub posts_written: usize,

    /// Records written to the reply partition
    pub replies_written: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}
