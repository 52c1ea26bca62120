// ============================================================
// Layer 2 — CleanUseCase
// ============================================================
// Orchestrates one cleaning run in order:
//
//   Step 1: Load raw records          (Layer 4 - data, via RecordSource)
//   Step 2: Normalize text fields     (Layer 4 - data)
//   Step 3: Drop duplicate urls       (Layer 4 - data)
//   Step 4: Classify each record      (Layer 4 - data)
//   Step 5: Partition clean/unclean   (Layer 4 - data)
//   Step 6: Write both CSV files      (Layer 5 - infra)
//   Step 7: Summarise                 (Layer 5 - infra)
//
// A missing raw file is not an error: the run reports it and
// returns CleanOutcome::SourceMissing without writing anything.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::{
    classifier::RecordClassifier,
    dedup::dedupe_by_url,
    loader::JsonRecordSource,
    normalizer::normalize_record,
    partitioner::{partition, Partition},
};
use crate::domain::error::PipelineError;
use crate::domain::record::RawRecord;
use crate::domain::traits::RecordSource;
use crate::infra::{config::PipelineConfig, csv_store, report::CleaningSummary};

/// How a cleaning run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanOutcome {
    /// Both partitions were written
    Completed(CleaningSummary),
    /// The raw source does not exist; nothing was written
    SourceMissing { path: PathBuf },
}

/// Steps 2–5: the pure part of the run.
pub fn clean_records(raw: Vec<RawRecord>, min_answer_length: usize) -> Partition {
    let normalized = raw.into_iter().map(normalize_record).collect();
    let unique     = dedupe_by_url(normalized);
    let classified = RecordClassifier::new(min_answer_length).classify_all(unique);
    partition(classified, min_answer_length)
}

pub struct CleanUseCase<'a, S = JsonRecordSource> {
    config: &'a PipelineConfig,
    source: S,
}

impl<'a> CleanUseCase<'a, JsonRecordSource> {
    /// Read raw records from the file named in the config.
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config, source: JsonRecordSource::new(config.raw_path()) }
    }
}

impl<'a, S: RecordSource> CleanUseCase<'a, S> {
    /// Read raw records from any other source.
    pub fn with_source(config: &'a PipelineConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn execute(&self) -> Result<CleanOutcome> {
        let cfg = self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let raw = match self.source.load_all() {
            Ok(records) => records,
            Err(PipelineError::InputMissing { path }) => {
                tracing::warn!("Raw data not found at '{}'; run the scraper first", path.display());
                return Ok(CleanOutcome::SourceMissing { path });
            }
            Err(e) => return Err(e).context("Failed to load raw records"),
        };
        let total_raw = raw.len();

        // ── Steps 2–5: Normalize, dedupe, classify, partition ────────────────
        let partition = clean_records(raw, cfg.min_answer_length);

        // ── Step 6: Persist ───────────────────────────────────────────────────
        let clean_path   = cfg.clean_path();
        let unclean_path = cfg.unclean_path();
        csv_store::write_partition(&partition, &clean_path, &unclean_path)
            .with_context(|| format!("Failed to write partitions under '{}'", cfg.output_folder.display()))?;

        // ── Step 7: Summarise ─────────────────────────────────────────────────
        let summary = CleaningSummary::new(total_raw, &partition, clean_path, unclean_path);
        summary.log();

        Ok(CleanOutcome::Completed(summary))
    }
}
