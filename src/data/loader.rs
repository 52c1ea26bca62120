// ============================================================
// Layer 4 — Raw Record Loader
// ============================================================
// Reads the scraper's output: a single JSON array of objects
// with url/question/body/answer keys.
//
//   [
//     {"url": "https://...", "question": "...", "body": "...", "answer": "..."},
//     {"url": "https://...", "question": "...", "body": "",    "answer": null},
//     ...
//   ]
//
// A missing file is reported as InputMissing, which the clean
// use case turns into a no-op run. A file that exists but is not
// a JSON array of objects is InputInvalid.
//
// Reference: serde_json documentation (from_reader)

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::domain::error::PipelineError;
use crate::domain::record::RawRecord;
use crate::domain::traits::RecordSource;

/// Loads raw records from a JSON file on disk.
pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordSource {
    fn load_all(&self) -> Result<Vec<RawRecord>, PipelineError> {
        if !self.path.exists() {
            return Err(PipelineError::InputMissing { path: self.path.clone() });
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let records: Vec<RawRecord> = serde_json::from_reader(reader).map_err(|e| {
            PipelineError::InputInvalid {
                path:   self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::info!("Loaded {} raw entries from '{}'", records.len(), self.path.display());
        Ok(records)
    }
}
