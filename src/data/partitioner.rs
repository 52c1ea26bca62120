// ============================================================
// Layer 4 — Dataset Partitioner
// ============================================================
// Splits classified records into two disjoint sets:
//
//   clean   → reason is Other AND the answer is present, non-blank
//             and at least `min_answer_length` chars after trimming
//   unclean → everything else, each keeping its original reason
//
// The length check repeats the classifier's. With the same
// threshold on both sides it never changes the outcome; with a
// lower classifier threshold a record can land in `unclean` while
// still tagged Other.

use std::collections::HashMap;

use crate::domain::record::{ClassifiedRecord, Reason};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Partition {
    pub clean:   Vec<ClassifiedRecord>,
    pub unclean: Vec<ClassifiedRecord>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.clean.len() + self.unclean.len()
    }

    /// Count of each reason in the unclean set, most frequent first.
    /// Ties follow classifier precedence order.
    pub fn reason_breakdown(&self) -> Vec<(Reason, usize)> {
        let mut counts: HashMap<Reason, usize> = HashMap::new();
        for rec in &self.unclean {
            *counts.entry(rec.reason).or_insert(0) += 1;
        }

        let mut breakdown: Vec<(Reason, usize)> = counts.into_iter().collect();
        breakdown.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        breakdown
    }
}

/// True if the record belongs in the clean set.
pub fn is_clean(record: &ClassifiedRecord, min_answer_length: usize) -> bool {
    if record.reason != Reason::Other {
        return false;
    }
    match record.record.answer.as_deref().map(str::trim) {
        Some(answer) => !answer.is_empty() && answer.chars().count() >= min_answer_length,
        None => false,
    }
}

/// Place every record in exactly one of the two sets, keeping order.
pub fn partition(records: Vec<ClassifiedRecord>, min_answer_length: usize) -> Partition {
    let (clean, unclean): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|r| is_clean(r, min_answer_length));

    tracing::debug!("Partitioned into {} clean / {} unclean", clean.len(), unclean.len());
    Partition { clean, unclean }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classifier::RecordClassifier;
    use crate::data::normalizer::normalize_record;
    use crate::domain::record::RawRecord;
    use proptest::prelude::*;

    fn classified(url: &str, answer: Option<&str>, threshold: usize) -> Vec<ClassifiedRecord> {
        let rec = normalize_record(RawRecord::new(Some(url), Some("q"), None, answer));
        RecordClassifier::new(threshold).classify_all(vec![rec])
    }

    fn sample_set() -> Vec<ClassifiedRecord> {
        let mut all = Vec::new();
        all.extend(classified("https://a", Some("this is a sufficiently long answer text"), 15));
        all.extend(classified("https://b", Some("short"), 15));
        all.extend(classified("ftp://c", Some("a valid full answer here"), 15));
        all.extend(classified("https://d", None, 15));
        all.extend(classified("https://e", Some("another perfectly fine answer"), 15));
        all
    }

    #[test]
    fn test_valid_record_is_clean() {
        let p = partition(classified("https://x", Some("this is a sufficiently long answer text"), 15), 15);
        assert_eq!(p.clean.len(), 1);
        assert!(p.unclean.is_empty());
    }

    #[test]
    fn test_disjoint_and_exhaustive() {
        let input = sample_set();
        let p     = partition(input.clone(), 15);

        assert_eq!(p.total(), input.len());
        for rec in &input {
            let in_clean   = p.clean.contains(rec);
            let in_unclean = p.unclean.contains(rec);
            assert!(in_clean ^ in_unclean, "record in both or neither: {:?}", rec.record.url);
        }
    }

    #[test]
    fn test_order_preserved_within_sets() {
        let p = partition(sample_set(), 15);
        let clean_urls: Vec<_> = p.clean.iter().map(|r| r.record.url_text().unwrap()).collect();
        assert_eq!(clean_urls, ["https://a", "https://e"]);
    }

    #[test]
    fn test_other_failing_recheck_keeps_other_tag() {
        // Classified with a lower threshold, partitioned with the stricter one
        let recs = classified("https://x", Some("twelve chars"), 5);
        assert_eq!(recs[0].reason, Reason::Other);

        let p = partition(recs, 15);
        assert!(p.clean.is_empty());
        assert_eq!(p.unclean[0].reason, Reason::Other);
    }

    #[test]
    fn test_breakdown_sorted_by_count() {
        let mut input = sample_set();
        input.extend(classified("https://f", Some("tiny"), 15));
        let p = partition(input, 15);
        assert_eq!(
            p.reason_breakdown(),
            vec![(Reason::TooShort, 2), (Reason::NoAnswer, 1), (Reason::MalformedEntry, 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        let p = partition(Vec::new(), 15);
        assert_eq!(p, Partition::default());
        assert!(p.reason_breakdown().is_empty());
    }

    fn arbitrary_record() -> impl Strategy<Value = (u8, Option<String>)> {
        (0u8..3, proptest::option::of("[a-zA-Z \t]{0,25}|none|NaN|&nbsp;"))
    }

    proptest! {
        #[test]
        fn test_partition_is_disjoint_and_exhaustive(
            specs     in proptest::collection::vec(arbitrary_record(), 0..40),
            threshold in 0usize..30,
        ) {
            let records: Vec<_> = specs
                .iter()
                .enumerate()
                .map(|(i, (url_kind, answer))| {
                    let url = match *url_kind {
                        0 => Some("https://x"),
                        1 => Some("ftp://x"),
                        _ => None,
                    };
                    let mut raw = RawRecord::new(url, Some("q"), None, answer.as_deref());
                    raw.extra.insert("idx".to_string(), serde_json::Value::from(i));
                    normalize_record(raw)
                })
                .collect();
            let classified = RecordClassifier::new(threshold).classify_all(records);
            let p = partition(classified, threshold);

            prop_assert_eq!(p.total(), specs.len());
            prop_assert!(p.clean.iter().all(|r| r.reason == Reason::Other && is_clean(r, threshold)));
            prop_assert!(p.unclean.iter().all(|r| !is_clean(r, threshold)));

            let idx = |r: &ClassifiedRecord| r.record.extra["idx"].as_u64().unwrap() as usize;
            let mut seen: Vec<usize> = p.clean.iter().chain(&p.unclean).map(idx).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..specs.len()).collect::<Vec<_>>());
        }
    }
}
