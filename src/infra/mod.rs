// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// File formats and cross-cutting concerns that the pipeline steps
// themselves stay free of:
//
//   config.rs    — PipelineConfig, loaded once from config.json
//                  and passed by reference to every step.
//
//   csv_store.rs — Writes the clean/unclean partitions and reads
//                  the intent-labelled CSV for the dialogue builder.
//
//   jsonl.rs     — Writes dialogue records one JSON object per line.
//
//   report.rs    — Run summaries: counts, reason breakdown and
//                  intent distribution, rendered for the console.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Pipeline configuration loading and validation
pub mod config;

/// CSV persistence for partitions and labelled rows
pub mod csv_store;

/// JSONL persistence for dialogue records
pub mod jsonl;

/// Run summaries
pub mod report;
