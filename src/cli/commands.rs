// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `clean` and `build`, and their flags.
//
// Every flag is an override on top of config.json; anything not
// given on the command line comes from the config file.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::infra::config::{PipelineConfig, DEFAULT_CONFIG_PATH};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, deduplicate and categorise the scraped Q&A records
    Clean(CleanArgs),

    /// Turn the intent-labelled CSV into dialogue training JSONL
    Build(BuildArgs),
}

/// All arguments for the `clean` command.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Pipeline configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Minimum answer length in characters, overriding the config value
    #[arg(long)]
    pub min_answer_length: Option<usize>,
}

impl CleanArgs {
    /// Apply command-line overrides to a loaded config.
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(n) = self.min_answer_length {
            config.min_answer_length = n;
        }
    }
}

/// All arguments for the `build` command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Pipeline configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Intent-labelled CSV to read instead of the configured one
    #[arg(long)]
    pub input: Option<String>,

    /// Share of dialogues held out for evaluation, in [0, 1)
    #[arg(long)]
    pub eval_fraction: Option<f64>,

    /// Seed for the evaluation shuffle
    #[arg(long)]
    pub seed: Option<u64>,
}

impl BuildArgs {
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(f) = self.eval_fraction {
            config.dialogue.eval_fraction = f;
        }
        if let Some(seed) = self.seed {
            config.dialogue.split_seed = seed;
        }
    }
}
