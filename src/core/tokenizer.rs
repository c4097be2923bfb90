//! CJK-aware search tokenization.
//!
//! Produces a deduplicated, first-occurrence-order token sequence
//! from free text. Latin-script words are emitted whole; words
//! containing CJK code points are additionally expanded into all
//! contiguous 1- to 4-character substrings, enabling substring
//! matching without a dictionary segmenter. The 4-gram cap bounds
//! the token blowup for long CJK runs.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// HTML-tag-like spans, removed before splitting
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("invalid tag regex"));

/// Markdown/punctuation symbols blanked before splitting
const MARKDOWN_SYMBOLS: &[char] = &[
    '#', '*', '`', '[', ']', '(', ')', '!', '>', '-', '_', '~', '|', '=', '+',
];

/// Longest CJK substring emitted per start offset
const MAX_GRAM: usize = 4;

/// Tokenize free text into deduplicated search tokens
///
/// Relative order of first occurrences is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let without_tags = TAG_RE.replace_all(text, "");
    let blanked: String = without_tags
        .chars()
        .map(|c| if MARKDOWN_SYMBOLS.contains(&c) { ' ' } else { c })
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens = Vec::new();

    // Split on whitespace (including the full-width space) and any
    // other non-alphanumeric code point; CJK ideographs count as
    // alphanumeric and survive the split.
    for word in blanked.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }

        if word.chars().any(is_cjk_char) {
            emit(&mut tokens, &mut seen, word);
            emit_grams(&mut tokens, &mut seen, word);
        } else {
            emit(&mut tokens, &mut seen, word);
        }
    }

    tokens
}

/// Tokenize and space-join, for the search index record fields
pub fn tokenize_joined(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Emit all contiguous 1..=4-character substrings of a CJK word
///
/// Works on collected chars, never byte offsets, so multi-byte
/// code points are safe to window over.
fn emit_grams(tokens: &mut Vec<String>, seen: &mut HashSet<String>, word: &str) {
    let chars: Vec<char> = word.chars().collect();

    for n in 1..=MAX_GRAM {
        if chars.len() < n {
            break;
        }
        for window in chars.windows(n) {
            emit(tokens, seen, &window.iter().collect::<String>());
        }
    }
}

fn emit(tokens: &mut Vec<String>, seen: &mut HashSet<String>, token: &str) {
    if seen.insert(token.to_string()) {
        tokens.push(token.to_string());
    }
}

/// CJK script code points requiring character-level tokenization
fn is_cjk_char(c: char) -> bool {
    let cp = c as u32;
    // CJK Unified Ideographs
    (0x4E00..=0x9FFF).contains(&cp)
    // CJK Extension A
    || (0x3400..=0x4DBF).contains(&cp)
    // CJK Extension B
    || (0x20000..=0x2A6DF).contains(&cp)
    // Hiragana
    || (0x3040..=0x309F).contains(&cp)
    // Katakana
    || (0x30A0..=0x30FF).contains(&cp)
    // Hangul Syllables
    || (0xAC00..=0xD7AF).contains(&cp)
    // Hangul Jamo
    || (0x1100..=0x11FF).contains(&cp)
    // Hangul Compatibility Jamo
    || (0x3130..=0x318F).contains(&cp)
}
