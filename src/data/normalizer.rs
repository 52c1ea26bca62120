// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans scraped free text before anything inspects it.
//
// Scraped forum pages leave behind:
//   - HTML entities the parser did not decode (&nbsp; &amp; &#39;)
//   - Runs of spaces, tabs and newlines from page layout
//   - Leading/trailing padding around every field
//
// Cleaning steps (applied in order):
//   1. Replace every `&word;` entity with a single space
//   2. Collapse every whitespace run (including step 1's spaces) to one space
//   3. Trim both ends
//
// The result has no entities, no double spaces and no edge
// whitespace, so running it twice changes nothing.
//
// Reference: regex crate documentation (replace_all)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::record::{NormalizedRecord, RawRecord};

static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&\w+;").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize one free-text field. Absent text becomes "".
pub fn normalize(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let no_entities = HTML_ENTITY.replace_all(text, " ");
    let collapsed   = WHITESPACE_RUN.replace_all(&no_entities, " ");
    collapsed.trim().to_string()
}

/// Apply `normalize` to question, body and answer.
///
/// The url is left untouched because it is the deduplication key.
/// An absent answer stays absent so the partitioner can still see it.
pub fn normalize_record(raw: RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        question: normalize(raw.question.as_deref()),
        body:     normalize(raw.body.as_deref()),
        answer:   raw.answer.as_deref().map(|a| normalize(Some(a))),
        url:      raw.url,
        extra:    raw.extra,
    }
}
