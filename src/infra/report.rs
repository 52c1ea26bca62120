// ============================================================
// Layer 5 — Run Summaries
// ============================================================
// Aggregate counts for one run, rendered as the human-readable
// block the CLI prints at the end.
//
// Example clean summary:
//
//   Cleaning complete!
//      • Cleaned dataset saved to:   data/cleaned_data.csv
//      • Uncleaned dataset saved to: data/uncleaned_data.csv
//
//   SUMMARY:
//      • Total raw entries:     120
//      • Deduplicated entries:  97
//      • Cleaned entries:       71
//      • Uncleaned entries:     26
//
//   Breakdown of uncleaned entries:
//      Too Short        14
//      No Answer        9
//      Malformed Entry  3
//
// The console text is not a machine-readable contract.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::data::partitioner::Partition;
use crate::domain::intent::Intent;
use crate::domain::record::Reason;

/// Counts for one cleaning run.
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningSummary {
    /// Records read from the raw source
    pub total_raw: usize,

    /// Records left after deduplication (all of them were classified)
    pub total_classified: usize,

    pub clean:   usize,
    pub unclean: usize,

    /// Reason counts among unclean records, most frequent first
    pub reason_breakdown: Vec<(Reason, usize)>,

    pub clean_path:   PathBuf,
    pub unclean_path: PathBuf,
}

impl CleaningSummary {
    pub fn new(total_raw: usize, partition: &Partition, clean_path: PathBuf, unclean_path: PathBuf) -> Self {
        Self {
            total_raw,
            total_classified: partition.total(),
            clean:            partition.clean.len(),
            unclean:          partition.unclean.len(),
            reason_breakdown: partition.reason_breakdown(),
            clean_path,
            unclean_path,
        }
    }

    /// Emit the counts as structured log events.
    pub fn log(&self) {
        tracing::info!(
            total_raw = self.total_raw,
            total_classified = self.total_classified,
            clean = self.clean,
            unclean = self.unclean,
            "Cleaning complete"
        );
        for (reason, count) in &self.reason_breakdown {
            tracing::debug!(reason = reason.as_str(), count, "Unclean reason");
        }
    }
}

impl fmt::Display for CleaningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleaning complete!")?;
        writeln!(f, "   • Cleaned dataset saved to:   {}", self.clean_path.display())?;
        writeln!(f, "   • Uncleaned dataset saved to: {}", self.unclean_path.display())?;
        writeln!(f)?;
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "   • Total raw entries:     {}", self.total_raw)?;
        writeln!(f, "   • Deduplicated entries:  {}", self.total_classified)?;
        writeln!(f, "   • Cleaned entries:       {}", self.clean)?;
        writeln!(f, "   • Uncleaned entries:     {}", self.unclean)?;
        writeln!(f)?;
        write!(f, "Breakdown of uncleaned entries:")?;
        if self.reason_breakdown.is_empty() {
            write!(f, "\n   (none)")?;
        }
        for (reason, count) in &self.reason_breakdown {
            write!(f, "\n   {:<16} {}", reason.as_str(), count)?;
        }
        Ok(())
    }
}

/// Counts for one dialogue build.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSummary {
    pub total_rows: usize,
    pub train:      usize,
    pub eval:       usize,

    /// Dialogues per intent across train and eval
    pub intents: BTreeMap<Intent, usize>,

    pub dialogue_path: PathBuf,
    /// Only set when an evaluation split was written
    pub eval_path:     Option<PathBuf>,
}

impl DialogueSummary {
    pub fn total_dialogues(&self) -> usize {
        self.train + self.eval
    }
}

impl fmt::Display for DialogueSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Structured dataset created → {}", self.dialogue_path.display())?;
        if let Some(eval_path) = &self.eval_path {
            writeln!(f, "Evaluation split created  → {}", eval_path.display())?;
        }
        writeln!(f, "Total dialogue pairs: {} (from {} rows)", self.total_dialogues(), self.total_rows)?;
        if self.eval_path.is_some() {
            writeln!(f, "   • train: {}", self.train)?;
            writeln!(f, "   • eval:  {}", self.eval)?;
        }
        write!(f, "Intent distribution:")?;
        for (intent, count) in &self.intents {
            write!(f, "\n   {:<20} {}", intent.as_str(), count)?;
        }
        Ok(())
    }
}
