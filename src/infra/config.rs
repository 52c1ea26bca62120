// ============================================================
// Layer 5 — Pipeline Configuration
// ============================================================
// Every path and threshold comes from one JSON file (config.json
// by default). The same file also drives the scraper, so keys this
// crate does not know (base_url, headers, ...) are ignored.
//
// Example:
//   {
//     "output_folder": "data",
//     "raw_file": "raw_data.json",
//     "clean_file": "cleaned_data.csv",
//     "unclean_file": "uncleaned_data.csv",
//     "min_answer_length": 15,
//     "dialogue": { "eval_fraction": 0.1, "split_seed": 7 }
//   }
//
// The config is loaded once per run and passed by reference to
// every step; nothing reads it from global state.
//
// Reference: serde documentation (default values)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::error::PipelineError;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

fn default_min_answer_length() -> usize {
    15
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding every input and output file
    pub output_folder: PathBuf,

    /// Scraper output, a JSON array of records
    pub raw_file: String,

    /// CSV of records that passed every check
    pub clean_file: String,

    /// CSV of rejected records with their reason
    pub unclean_file: String,

    /// Answers shorter than this (in chars, after trimming) are rejected
    #[serde(default = "default_min_answer_length")]
    pub min_answer_length: usize,

    #[serde(default)]
    pub dialogue: DialogueConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Intent-labelled CSV written by the labelling step
    pub intent_file: String,

    /// JSONL training records
    pub dialogue_file: String,

    /// JSONL evaluation records, only written when eval_fraction > 0
    pub eval_file: String,

    /// Share of dialogues held out for evaluation, in [0, 1)
    pub eval_fraction: f64,

    pub split_seed: u64,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            intent_file:   "dataset_with_intents.csv".to_string(),
            dialogue_file: "structured_dataset.jsonl".to_string(),
            eval_file:     "eval_dataset.jsonl".to_string(),
            eval_fraction: 0.0,
            split_seed:    42,
        }
    }
}

impl PipelineConfig {
    /// Read and validate the config at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::ConfigMissing { path: path.to_path_buf() });
        }

        let json   = fs::read_to_string(path)?;
        let config = serde_json::from_str::<PipelineConfig>(&json).map_err(|e| {
            PipelineError::ConfigInvalid {
                path:   path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate(path)?;
        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Check value ranges. `origin` is only used in the error message.
    pub fn validate(&self, origin: &Path) -> Result<(), PipelineError> {
        let invalid = |reason: String| PipelineError::ConfigInvalid {
            path: origin.to_path_buf(),
            reason,
        };

        let fraction = self.dialogue.eval_fraction;
        if !(0.0..1.0).contains(&fraction) {
            return Err(invalid(format!(
                "dialogue.eval_fraction must be in [0, 1), got {fraction}"
            )));
        }

        Ok(())
    }

    pub fn raw_path(&self) -> PathBuf {
        self.output_folder.join(&self.raw_file)
    }

    pub fn clean_path(&self) -> PathBuf {
        self.output_folder.join(&self.clean_file)
    }

    pub fn unclean_path(&self) -> PathBuf {
        self.output_folder.join(&self.unclean_file)
    }

    pub fn intent_path(&self) -> PathBuf {
        self.output_folder.join(&self.dialogue.intent_file)
    }

    pub fn dialogue_path(&self) -> PathBuf {
        self.output_folder.join(&self.dialogue.dialogue_file)
    }

    pub fn eval_path(&self) -> PathBuf {
        self.output_folder.join(&self.dialogue.eval_file)
    }
}
