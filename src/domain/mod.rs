// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that name the things
// the pipeline moves around:
//
//   RawRecord          → one scraped Q&A item, as read from JSON
//   NormalizedRecord   → the same item after text cleanup
//   ClassifiedRecord   → a normalized item plus its Reason tag
//   DialogueRecord     → one user/assistant exchange for training
//
// Rules for this layer:
//   - NO file I/O
//   - NO regex or CSV machinery
//   - Only data and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Raw, normalized and classified Q&A records
pub mod record;

// The closed set of intent labels
pub mod intent;

// Dialogue-format training records
pub mod dialogue;

// Source-level failures
pub mod error;

// Seams other layers implement
pub mod traits;
