// ============================================================
// Layer 4 — Record Classifier
// ============================================================
// Tags each normalized record with exactly one Reason. Rules are
// checked in a fixed order and the first match wins:
//
//   1. No Answer       → trimmed, lowercased answer is "", "none" or "nan"
//   2. Malformed Entry → url missing or not starting with "https"
//   3. Too Short       → trimmed answer has fewer chars than the minimum
//   4. Other           → passed every check
//
// The question is not inspected. Absent fields are treated as
// empty, so classification never fails.

use crate::domain::record::{ClassifiedRecord, NormalizedRecord, Reason};

/// Placeholder strings a dataframe round-trip leaves where an answer was missing.
const EMPTY_ANSWER_MARKERS: [&str; 3] = ["", "none", "nan"];

const URL_SCHEME_PREFIX: &str = "https";

pub struct RecordClassifier {
    /// Answers shorter than this many characters are "Too Short"
    min_answer_length: usize,
}

impl RecordClassifier {
    pub fn new(min_answer_length: usize) -> Self {
        Self { min_answer_length }
    }

    /// Assign the first matching reason.
    pub fn classify(&self, record: &NormalizedRecord) -> Reason {
        let answer = record.answer_text().trim();

        if EMPTY_ANSWER_MARKERS.contains(&answer.to_lowercase().as_str()) {
            return Reason::NoAnswer;
        }

        match record.url_text() {
            Some(url) if url.starts_with(URL_SCHEME_PREFIX) => {}
            _ => return Reason::MalformedEntry,
        }

        if answer.chars().count() < self.min_answer_length {
            return Reason::TooShort;
        }

        Reason::Other
    }

    /// Classify every record, keeping input order.
    pub fn classify_all(&self, records: Vec<NormalizedRecord>) -> Vec<ClassifiedRecord> {
        records
            .into_iter()
            .map(|record| {
                let reason = self.classify(&record);
                ClassifiedRecord { record, reason }
            })
            .collect()
    }
}
