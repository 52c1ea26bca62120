// ============================================================
// Layer 3 — Q&A Record Types
// ============================================================
// A scraped item moves through three shapes, each derived from
// the previous one and never mutated afterwards:
//
//   RawRecord ──normalize──▶ NormalizedRecord ──classify──▶ ClassifiedRecord
//
// The scraper is loose about types: answers can be null, urls can
// be missing, and some dumps carry extra keys. Decoding is lenient
// so those quirks become data instead of parse failures:
//   - question/body/answer: strings as-is, numbers/bools as text,
//     null or absent → None
//   - url: a JSON string is a url; any other non-null value is
//     kept as compact JSON so it still dedupes and prints as scraped
//   - every other key is kept verbatim in `extra`
//
// Reference: serde documentation (deserialize_with, flatten)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One scraped Q&A unit exactly as the scraper wrote it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    /// Page the item was scraped from. Expected to be an absolute https url.
    #[serde(default, deserialize_with = "url_field")]
    pub url: Option<UrlField>,

    /// Question title
    #[serde(default, deserialize_with = "text_field")]
    pub question: Option<String>,

    /// Question body, often empty
    #[serde(default, deserialize_with = "text_field")]
    pub body: Option<String>,

    /// Accepted or top answer, null when the page had none
    #[serde(default, deserialize_with = "text_field")]
    pub answer: Option<String>,

    /// Any other keys on the record, carried through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawRecord {
    /// Convenience constructor for the four known fields.
    pub fn new(
        url:      Option<&str>,
        question: Option<&str>,
        body:     Option<&str>,
        answer:   Option<&str>,
    ) -> Self {
        Self {
            url:      url.map(|u| UrlField::Text(u.to_string())),
            question: question.map(str::to_string),
            body:     body.map(str::to_string),
            answer:   answer.map(str::to_string),
            extra:    BTreeMap::new(),
        }
    }
}

/// The url key as scraped.
///
/// `Other` holds the compact JSON of a non-string value, so `42` and
/// `"42"` stay distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlField {
    Text(String),
    Other(String),
}

impl UrlField {
    /// The url if it was a JSON string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UrlField::Text(s)  => Some(s),
            UrlField::Other(_) => None,
        }
    }

    /// What goes in the `url` CSV cell.
    pub fn as_cell(&self) -> &str {
        match self {
            UrlField::Text(s) | UrlField::Other(s) => s,
        }
    }
}

/// A RawRecord whose free-text fields went through normalization.
///
/// `url` is never rewritten: it is the deduplication key.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub url:      Option<UrlField>,
    pub question: String,
    pub body:     String,
    pub answer:   Option<String>,
    pub extra:    BTreeMap<String, Value>,
}

impl NormalizedRecord {
    /// The url if it was a JSON string.
    pub fn url_text(&self) -> Option<&str> {
        self.url.as_ref().and_then(UrlField::as_text)
    }

    /// The answer with absence mapped to "".
    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or("")
    }
}

/// Why a record did or did not make it into the clean set.
///
/// `Other` is the sentinel for "passed every check".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Reason {
    #[serde(rename = "No Answer")]
    NoAnswer,
    #[serde(rename = "Malformed Entry")]
    MalformedEntry,
    #[serde(rename = "Too Short")]
    TooShort,
    #[serde(rename = "Other")]
    Other,
}

impl Reason {
    /// Every reason, in classifier precedence order.
    pub const ALL: [Reason; 4] = [
        Reason::NoAnswer,
        Reason::MalformedEntry,
        Reason::TooShort,
        Reason::Other,
    ];

    /// The label written to the `reason` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::NoAnswer       => "No Answer",
            Reason::MalformedEntry => "Malformed Entry",
            Reason::TooShort       => "Too Short",
            Reason::Other          => "Other",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized record with exactly one reason attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: NormalizedRecord,
    pub reason: Reason,
}

// ─── Lenient field decoders ───────────────────────────────────────────────────

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null      => None,
        Value::String(s) => Some(s),
        other            => Some(other.to_string()),
    })
}

fn url_field<'de, D>(deserializer: D) -> Result<Option<UrlField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null      => None,
        Value::String(s) => Some(UrlField::Text(s)),
        other            => Some(UrlField::Other(other.to_string())),
    })
}
