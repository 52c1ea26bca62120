// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Parses arguments with
// clap, loads the config, and hands off to Layer 2. The summary
// printing happens here and nowhere else.
//
// Two commands are supported:
//   1. `clean`: raw scraped JSON → clean/unclean CSV
//   2. `build`: intent-labelled CSV → dialogue JSONL
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, CleanArgs, Commands};

use crate::infra::config::PipelineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "qa-corpus",
    version,
    about = "Clean scraped Q&A records and shape them into dialogue training data."
)]
pub struct Cli {
    /// The subcommand to run (clean or build)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Clean(args) => run_clean(args),
            Commands::Build(args) => run_build(args),
        }
    }
}

/// Load the config, apply overrides, re-validate. Any failure here is fatal.
fn load_config(path: &str, apply: impl FnOnce(&mut PipelineConfig)) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::load(path)?;
    apply(&mut config);
    config.validate(Path::new(path))?;
    Ok(config)
}

fn run_clean(args: CleanArgs) -> Result<()> {
    use crate::application::clean_use_case::{CleanOutcome, CleanUseCase};

    let config = load_config(&args.config, |c| args.apply(c))?;
    tracing::info!("Cleaning '{}'", config.raw_path().display());

    match CleanUseCase::new(&config).execute()? {
        CleanOutcome::Completed(summary) => println!("\n{summary}"),
        CleanOutcome::SourceMissing { path } => {
            println!("{} not found. Please run the scraper first.", path.display());
        }
    }
    Ok(())
}

fn run_build(args: BuildArgs) -> Result<()> {
    use crate::application::build_use_case::{BuildOutcome, BuildUseCase};

    let config = load_config(&args.config, |c| args.apply(c))?;

    let mut use_case = BuildUseCase::new(&config);
    if let Some(input) = &args.input {
        use_case = use_case.with_input(input);
    }

    match use_case.execute()? {
        BuildOutcome::Completed(summary) => println!("\n{summary}"),
        BuildOutcome::SourceMissing { path } => {
            println!("{} not found. Label the cleaned dataset first.", path.display());
        }
    }
    Ok(())
}
