// ============================================================
// Layer 4 — Deduplicator
// ============================================================
// The scraper can visit the same question page more than once
// (it shows up on several listing pages). The url identifies the
// page, so the first record seen for a url wins and later ones
// are dropped without merging.
//
// Records with no url share one key: only the first is kept.

use std::collections::HashSet;

use crate::domain::record::NormalizedRecord;

/// Keep the first record for each distinct url, preserving order.
pub fn dedupe_by_url(records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    let before   = records.len();
    let mut seen = HashSet::with_capacity(before);

    let kept: Vec<NormalizedRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.url.clone()))
        .collect();

    tracing::debug!("Deduplicated {} → {} records", before, kept.len());
    kept
}
