// ============================================================
// Layer 5 — JSONL Writer
// ============================================================
// One serde-serialised value per line, UTF-8, non-ASCII left as-is.
// Existing files are overwritten.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::error::PipelineError;

/// Write `items` to `path`, creating the parent directory if needed.
pub fn write_jsonl<T: Serialize>(path: &Path, items: &[T]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut out, item)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    tracing::debug!("Wrote {} lines to '{}'", items.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::DialogueRecord;
    use crate::domain::intent::Intent;
    use tempfile::TempDir;

    #[test]
    fn test_one_object_per_line() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.jsonl");
        let recs = vec![
            DialogueRecord::exchange(1, Intent::Setup, "Q1", "A1"),
            DialogueRecord::exchange(2, Intent::Greeting, "Grüße?", "Hallo"),
        ];

        write_jsonl(&path, &recs).unwrap();

        let text  = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Grüße?"));
        let back: DialogueRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(back, recs[0]);
    }

    #[test]
    fn test_empty_items_create_empty_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("out.jsonl");
        write_jsonl::<DialogueRecord>(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
