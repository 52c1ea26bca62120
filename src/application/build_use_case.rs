// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Reshapes the intent-labelled CSV into dialogue training data:
//
//   Step 1: Read labelled rows        (Layer 5 - infra)
//   Step 2: Build dialogue records    (Layer 4 - data)
//   Step 3: Optional eval holdout     (Layer 4 - data)
//   Step 4: Write JSONL file(s)       (Layer 5 - infra)
//
// Like cleaning, a missing input file ends the run without output.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::{
    dialogue_builder::{build_dialogues, intent_distribution},
    splitter::split_train_eval,
};
use crate::domain::error::PipelineError;
use crate::infra::{config::PipelineConfig, csv_store, jsonl, report::DialogueSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Completed(DialogueSummary),
    SourceMissing { path: PathBuf },
}

pub struct BuildUseCase<'a> {
    config: &'a PipelineConfig,
    input:  PathBuf,
}

impl<'a> BuildUseCase<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config, input: config.intent_path() }
    }

    /// Read from `input` instead of the configured intent file.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn execute(&self) -> Result<BuildOutcome> {
        let cfg = self.config;

        // ── Step 1 ────────────────────────────────────────────────────────────
        let rows = match csv_store::read_labelled_rows(&self.input) {
            Ok(rows) => rows,
            Err(PipelineError::InputMissing { path }) => {
                tracing::warn!("Labelled dataset not found at '{}'", path.display());
                return Ok(BuildOutcome::SourceMissing { path });
            }
            Err(e) => return Err(e).context("Failed to read labelled dataset"),
        };
        let total_rows = rows.len();

        // ── Step 2 ────────────────────────────────────────────────────────────
        let dialogues = build_dialogues(rows);
        let intents   = intent_distribution(&dialogues);

        // ── Steps 3–4 ─────────────────────────────────────────────────────────
        let dialogue_path = cfg.dialogue_path();
        let fraction      = cfg.dialogue.eval_fraction;

        let (train, eval, eval_path) = if fraction > 0.0 {
            let (train, eval) = split_train_eval(dialogues, fraction, cfg.dialogue.split_seed);
            let eval_path     = cfg.eval_path();
            jsonl::write_jsonl(&eval_path, &eval)
                .with_context(|| format!("Failed to write '{}'", eval_path.display()))?;
            (train, eval.len(), Some(eval_path))
        } else {
            (dialogues, 0, None)
        };

        jsonl::write_jsonl(&dialogue_path, &train)
            .with_context(|| format!("Failed to write '{}'", dialogue_path.display()))?;

        tracing::info!("Built {} dialogue pairs ({} held out)", train.len() + eval, eval);

        Ok(BuildOutcome::Completed(DialogueSummary {
            total_rows,
            train: train.len(),
            eval,
            intents,
            dialogue_path,
            eval_path,
        }))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::DialogueRecord;
    use crate::domain::intent::Intent;
    use crate::infra::config::DialogueConfig;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, eval_fraction: f64) -> PipelineConfig {
        PipelineConfig {
            output_folder:     dir.path().to_path_buf(),
            raw_file:          "raw_data.json".to_string(),
            clean_file:        "cleaned_data.csv".to_string(),
            unclean_file:      "uncleaned_data.csv".to_string(),
            min_answer_length: 15,
            dialogue:          DialogueConfig { eval_fraction, ..DialogueConfig::default() },
        }
    }

    fn read_dialogues(path: &std::path::Path) -> Vec<DialogueRecord> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    const LABELLED: &str = "url,question,body,answer,reason,intent\n\
        https://a,How do I install it?,,Run the installer,Other,setup\n\
        https://b,What does it cost?,,,Other,pricing\n\
        https://c,Hello there,,Hi! How can I help?,Other,greeting\n\
        https://d,It crashes,,Update the driver,Other,weird_label\n";

    #[test]
    fn test_builds_jsonl_in_input_order() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir, 0.0);
        fs::write(cfg.intent_path(), LABELLED).unwrap();

        let BuildOutcome::Completed(summary) = BuildUseCase::new(&cfg).execute().unwrap() else {
            panic!("expected a completed build");
        };

        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.total_dialogues(), 3);
        assert_eq!(summary.eval_path, None);

        let out = read_dialogues(&cfg.dialogue_path());
        let ids: Vec<usize> = out.iter().map(|d| d.id).collect();
        assert_eq!(ids, [1, 3, 4]);
        assert_eq!(out[0].intent, Intent::Setup);
        assert_eq!(out[2].intent, Intent::GeneralQuery);
        assert!(!cfg.eval_path().exists());
    }

    #[test]
    fn test_eval_holdout_written_separately() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir, 0.25);

        let mut csv = String::from("question,answer\n");
        for i in 0..20 {
            csv.push_str(&format!("q{i},answer number {i}\n"));
        }
        fs::write(cfg.intent_path(), csv).unwrap();

        let BuildOutcome::Completed(summary) = BuildUseCase::new(&cfg).execute().unwrap() else {
            panic!("expected a completed build");
        };
        assert_eq!(summary.train, 15);
        assert_eq!(summary.eval, 5);

        let train = read_dialogues(&cfg.dialogue_path());
        let eval  = read_dialogues(&cfg.eval_path());
        assert_eq!(train.len(), 15);
        assert_eq!(eval.len(), 5);
        assert!(train.iter().all(|t| eval.iter().all(|e| e.id != t.id)));
        assert!(train.iter().all(|d| d.intent == Intent::GeneralQuery));
    }

    #[test]
    fn test_input_override_and_missing_input() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir, 0.0);

        let missing = dir.path().join("nope.csv");
        let outcome = BuildUseCase::new(&cfg).with_input(&missing).execute().unwrap();
        assert_eq!(outcome, BuildOutcome::SourceMissing { path: missing });
        assert!(!cfg.dialogue_path().exists());
    }

    #[test]
    fn test_missing_answer_column_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir, 0.0);
        fs::write(cfg.intent_path(), "question,intent\nq,setup\n").unwrap();

        assert!(BuildUseCase::new(&cfg).execute().is_err());
    }
}
