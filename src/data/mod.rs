// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Every step from the scraper's JSON to the two partitions, plus
// the dialogue reshaping that runs after intent labelling.
//
// The cleaning pipeline flows in this order:
//
//   raw_data.json
//       │
//       ▼
//   JsonRecordSource  → reads the JSON array into RawRecords
//       │
//       ▼
//   normalizer        → strips entities, collapses whitespace
//       │
//       ▼
//   dedup             → first record per url wins
//       │
//       ▼
//   RecordClassifier  → one Reason per record
//       │
//       ▼
//   partitioner       → clean / unclean sets
//
// The dialogue pipeline:
//
//   dataset_with_intents.csv → dialogue_builder → splitter → JSONL
//
// Every step here is pure apart from the loader, so each one is
// tested on its own.

/// Reads the scraper's JSON output
pub mod loader;

/// Cleans free-text fields
pub mod normalizer;

/// Drops repeated urls
pub mod dedup;

/// Assigns a Reason to each record
pub mod classifier;

/// Splits classified records into clean and unclean sets
pub mod partitioner;

/// Reshapes labelled rows into dialogue records
pub mod dialogue_builder;

/// Seeded train/evaluation holdout
pub mod splitter;
