//! Text processing utilities.
//!
//! Whitespace normalization, sentence counting and paragraph splitting used
//! to prepare page text for the analyzer and to compute its scalar stats.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence-ending punctuation. `"Wait..."` and `"Really?!"` count once.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Collapse every run of whitespace (spaces, tabs, newlines) to one space
/// and trim both ends.
///
/// This is the cleanup the page-text extractor performs before analysis.
/// [`crate::analyzer::PageText::from_raw`] applies it for callers that hold
/// raw text.
pub fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Count sentences as maximal runs of `.`, `!` or `?`.
///
/// Abbreviations and decimals count as sentence ends too.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Split text into paragraphs (separated by blank lines).
///
/// Used to derive a paragraph count for plain-text input, where there are no
/// `<p>` elements to count.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
