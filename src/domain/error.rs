// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Only source-level problems are errors. Anything wrong with an
// individual record is captured as data (see record::Reason).
//
//   ConfigMissing / ConfigInvalid → fatal, nothing runs
//   InputMissing                  → reported, the run is a no-op
//   InputInvalid / MissingColumn  → the input exists but is unusable
//   Io / Csv / Json               → failures while reading or writing files

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("config file not found at '{}'", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("config file '{}' is invalid: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("input file not found at '{}'", path.display())]
    InputMissing { path: PathBuf },

    #[error("input file '{}' could not be parsed: {reason}", path.display())]
    InputInvalid { path: PathBuf, reason: String },

    #[error("input file '{}' has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// True for the one condition a use case downgrades to a no-op.
    pub fn is_input_missing(&self) -> bool {
        matches!(self, PipelineError::InputMissing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_missing_is_recognised() {
        let err = PipelineError::InputMissing { path: PathBuf::from("data/raw.json") };
        assert!(err.is_input_missing());
        assert_eq!(err.to_string(), "input file not found at 'data/raw.json'");
    }

    #[test]
    fn test_config_missing_is_not_input_missing() {
        let err = PipelineError::ConfigMissing { path: PathBuf::from("config.json") };
        assert!(!err.is_input_missing());
    }
}
