// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case walks the other layers through one run:
//
//   clean_use_case: raw JSON → clean/unclean CSV + summary
//   build_use_case: intent-labelled CSV → dialogue JSONL
//
// Rules for this layer:
//   - No text rules or file formats here (Layers 4 and 5)
//   - No printing (Layer 1)
//   - Only workflow coordination and error context
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The cleaning and categorisation workflow
pub mod clean_use_case;

// The dialogue dataset workflow
pub mod build_use_case;
