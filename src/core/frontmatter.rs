//! Frontmatter extraction and field-value resolution.
//!
//! A document carries metadata only when it opens with a `---`
//! delimiter line, followed by a block of `key: value` lines, a
//! closing `---` line, and the body. Anything else is treated as a
//! plain body with an empty mapping.
//!
//! The archive contains several generations of metadata syntax for
//! list- and boolean-valued fields; this parser collapses them into
//! one resolution order per field, first matching syntax wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::{FieldValue, Frontmatter};

/// Delimited metadata block: opening `---` line, block, closing
/// `---` line, remainder. Tolerates CRLF line endings.
static FRONTMATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^---\r?\n([\s\S]*?)\r?\n---\r?\n([\s\S]*)$").expect("invalid frontmatter regex")
});

/// Split raw document text into a frontmatter mapping and the body
///
/// The body has the metadata block removed; when no block is present
/// the whole input is the body.
pub fn parse(raw: &str) -> (Frontmatter, String) {
    let Some(caps) = FRONTMATTER_RE.captures(raw) else {
        return (Frontmatter::new(), raw.to_string());
    };

    let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let body = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    let mut frontmatter = Frontmatter::new();

    for line in block.lines() {
        let Some(colon) = line.find(':') else {
            // Lines without a separator carry no field
            continue;
        };

        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();

        if key.is_empty() {
            continue;
        }

        frontmatter.insert(key, resolve_field(key, value));
    }

    (frontmatter, body.to_string())
}

/// Resolve one raw field value according to the per-field rules
fn resolve_field(key: &str, value: &str) -> FieldValue {
    match key {
        // Kept exactly as written, never restructured
        "date" => FieldValue::Str(value.to_string()),
        // True only for the literal `true`
        "reply" => FieldValue::Bool(value == "true"),
        "tags" => FieldValue::List(resolve_tags(value)),
        _ => resolve_generic(value),
    }
}

/// Resolve a `tags` value, trying each observed syntax in order
///
/// First matching syntax wins, never combined:
/// 1. bracketed list `[a, b, c]`
/// 2. comma-separated bare value `a, b, c`
/// 3. quote-wrapped value `"a b c"` (split on spaces when present)
/// 4. space-separated bare value `a b c`
fn resolve_tags(value: &str) -> Vec<String> {
    if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
        return split_list(&value[1..value.len() - 1]);
    }

    if value.contains(',') {
        return split_list(value);
    }

    if let Some(inner) = strip_wrapping_quotes(value) {
        if inner.contains(' ') {
            return inner
                .split(' ')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
        }
        let single = inner.trim();
        if single.is_empty() {
            return Vec::new();
        }
        return vec![single.to_string()];
    }

    value
        .split_whitespace()
        .map(unquote)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve any unrecognized field: bracketed values become
/// sequences, everything else a quote-stripped string
fn resolve_generic(value: &str) -> FieldValue {
    if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
        FieldValue::List(split_list(&value[1..value.len() - 1]))
    } else {
        FieldValue::Str(unquote(value).to_string())
    }
}

/// Split a comma-separated list, trimming and unquoting each entry
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .map(unquote)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Strip one pair of matching surrounding quote characters
fn unquote(value: &str) -> &str {
    let value = value.trim();
    strip_wrapping_quotes(value).unwrap_or(value)
}

/// The interior of a value fully wrapped in one matching quote pair
fn strip_wrapping_quotes(value: &str) -> Option<&str> {
    let mut chars = value.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first == last && (first == '"' || first == '\'') {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}
