// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The clean use case is written against RecordSource, not against
// a concrete file format.
//
// Implementations:
//   - JsonRecordSource → reads the scraper's JSON array from disk
//   - Vec<RawRecord>   → in-memory records (used by tests)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PipelineError;
use crate::domain::record::RawRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can hand over the full batch of raw scraped records.
///
/// A source that does not exist must report `PipelineError::InputMissing`
/// so the caller can treat the run as a no-op instead of a crash.
pub trait RecordSource {
    /// Load every raw record, in source order.
    fn load_all(&self) -> Result<Vec<RawRecord>, PipelineError>;
}

impl RecordSource for Vec<RawRecord> {
    fn load_all(&self) -> Result<Vec<RawRecord>, PipelineError> {
        Ok(self.clone())
    }
}
