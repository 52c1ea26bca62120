// ============================================================
// Layer 5 — CSV Store
// ============================================================
// Writes the clean/unclean partitions and reads the
// intent-labelled CSV back for the dialogue builder.
//
// Column layout of both partition files:
//
//   url,question,body,answer,<passthrough keys, sorted>,reason
//
// Passthrough keys are collected across BOTH partitions so the two
// files always share one header. An absent answer is an empty cell.
//
// Reference: csv crate documentation (Writer, ReaderBuilder)

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::data::partitioner::Partition;
use crate::domain::dialogue::LabelledRow;
use crate::domain::error::PipelineError;
use crate::domain::record::ClassifiedRecord;

const LEADING_COLUMNS: [&str; 4] = ["url", "question", "body", "answer"];
const REASON_COLUMN: &str = "reason";

/// Write both partitions, creating the destination directories if needed.
pub fn write_partition(
    partition:    &Partition,
    clean_path:   &Path,
    unclean_path: &Path,
) -> Result<(), PipelineError> {
    let extra_columns = passthrough_columns(partition);

    write_records(clean_path, &partition.clean, &extra_columns)?;
    write_records(unclean_path, &partition.unclean, &extra_columns)?;

    tracing::info!(
        "Wrote {} clean rows to '{}' and {} unclean rows to '{}'",
        partition.clean.len(),
        clean_path.display(),
        partition.unclean.len(),
        unclean_path.display(),
    );
    Ok(())
}

/// Sorted union of passthrough keys, minus any that would shadow a fixed column.
fn passthrough_columns(partition: &Partition) -> Vec<String> {
    let keys: BTreeSet<&String> = partition
        .clean
        .iter()
        .chain(&partition.unclean)
        .flat_map(|r| r.record.extra.keys())
        .collect();

    keys.into_iter()
        .filter(|k| k.as_str() != REASON_COLUMN && !LEADING_COLUMNS.contains(&k.as_str()))
        .cloned()
        .collect()
}

fn write_records(
    path:          &Path,
    records:       &[ClassifiedRecord],
    extra_columns: &[String],
) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = LEADING_COLUMNS.to_vec();
    header.extend(extra_columns.iter().map(String::as_str));
    header.push(REASON_COLUMN);
    writer.write_record(&header)?;

    for rec in records {
        let r = &rec.record;
        let mut row: Vec<String> = vec![
            r.url.as_ref().map(|u| u.as_cell().to_string()).unwrap_or_default(),
            r.question.clone(),
            r.body.clone(),
            r.answer.clone().unwrap_or_default(),
        ];
        row.extend(extra_columns.iter().map(|k| extra_cell(r.extra.get(k))));
        row.push(rec.reason.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

fn extra_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s))   => s.clone(),
        Some(other)              => other.to_string(),
    }
}

/// Read the question/answer/intent columns of a labelled CSV.
///
/// `intent` is optional; `question` and `answer` are required.
pub fn read_labelled_rows(path: &Path) -> Result<Vec<LabelledRow>, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::InputMissing { path: path.to_path_buf() });
    }

    let mut reader  = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers     = reader.headers()?.clone();
    let column      = |name: &str| headers.iter().position(|h| h.trim() == name);
    let require     = |name: &str| {
        column(name).ok_or_else(|| PipelineError::MissingColumn {
            path:   path.to_path_buf(),
            column: name.to_string(),
        })
    };

    let question_col = require("question")?;
    let answer_col   = require("answer")?;
    let intent_col   = column("intent");

    let mut rows = Vec::new();
    for (position, result) in reader.records().enumerate() {
        let record = result?;
        let cell   = |i: usize| record.get(i).unwrap_or("").to_string();

        rows.push(LabelledRow {
            position,
            question: cell(question_col),
            answer:   cell(answer_col),
            intent:   intent_col.map(cell),
        });
    }

    tracing::info!("Loaded {} labelled rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalizer::normalize_record;
    use crate::domain::record::{RawRecord, Reason};
    use tempfile::TempDir;

    fn classified(raw: RawRecord, reason: Reason) -> ClassifiedRecord {
        ClassifiedRecord { record: normalize_record(raw), reason }
    }

    #[test]
    fn test_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let partition = Partition {
            clean: vec![classified(
                RawRecord::new(Some("https://a"), Some("Q, with comma"), Some(""), Some("a long enough answer")),
                Reason::Other,
            )],
            unclean: vec![classified(
                RawRecord::new(Some("https://b"), Some("Q2"), None, None),
                Reason::NoAnswer,
            )],
        };
        let clean   = dir.path().join("out").join("clean.csv");
        let unclean = dir.path().join("out").join("unclean.csv");

        write_partition(&partition, &clean, &unclean).unwrap();

        let clean_text = fs::read_to_string(&clean).unwrap();
        assert_eq!(
            clean_text,
            "url,question,body,answer,reason\nhttps://a,\"Q, with comma\",,a long enough answer,Other\n"
        );
        let unclean_text = fs::read_to_string(&unclean).unwrap();
        assert_eq!(unclean_text, "url,question,body,answer,reason\nhttps://b,Q2,,,No Answer\n");
    }

    #[test]
    fn test_passthrough_columns_shared_by_both_files() {
        let dir = TempDir::new().unwrap();

        let mut with_votes = RawRecord::new(Some("https://a"), Some("Q"), None, Some("answer text here!"));
        with_votes.extra.insert("votes".to_string(), Value::from(7));
        with_votes.extra.insert("reason".to_string(), Value::from("shadowed"));

        let partition = Partition {
            clean:   vec![classified(with_votes, Reason::Other)],
            unclean: vec![classified(RawRecord::new(Some("https://b"), None, None, None), Reason::NoAnswer)],
        };
        let clean   = dir.path().join("clean.csv");
        let unclean = dir.path().join("unclean.csv");
        write_partition(&partition, &clean, &unclean).unwrap();

        let clean_text   = fs::read_to_string(&clean).unwrap();
        let unclean_text = fs::read_to_string(&unclean).unwrap();
        assert!(clean_text.starts_with("url,question,body,answer,votes,reason\n"));
        assert!(clean_text.contains(",7,Other"));
        assert!(unclean_text.starts_with("url,question,body,answer,votes,reason\n"));
        assert!(unclean_text.ends_with("https://b,,,,,No Answer\n"));
    }

    #[test]
    fn test_non_string_url_cell_is_compact_json() {
        let dir = TempDir::new().unwrap();
        let raw: Vec<RawRecord> =
            serde_json::from_str(r#"[{"url":42,"answer":"a"},{"url":[1,2],"answer":"b"}]"#).unwrap();
        let partition = Partition {
            clean:   Vec::new(),
            unclean: raw.into_iter().map(|r| classified(r, Reason::MalformedEntry)).collect(),
        };
        let clean   = dir.path().join("clean.csv");
        let unclean = dir.path().join("unclean.csv");
        write_partition(&partition, &clean, &unclean).unwrap();

        assert_eq!(
            fs::read_to_string(&unclean).unwrap(),
            "url,question,body,answer,reason\n42,,,a,Malformed Entry\n\"[1,2]\",,,b,Malformed Entry\n"
        );
    }

    #[test]
    fn test_empty_partition_still_has_header() {
        let dir     = TempDir::new().unwrap();
        let clean   = dir.path().join("clean.csv");
        let unclean = dir.path().join("unclean.csv");
        write_partition(&Partition::default(), &clean, &unclean).unwrap();
        assert_eq!(fs::read_to_string(&clean).unwrap(), "url,question,body,answer,reason\n");
    }

    #[test]
    fn test_reads_labelled_rows_with_intent() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("intents.csv");
        fs::write(
            &path,
            "url,question,body,answer,reason,intent\n\
             https://a,How to install?,,Run the installer,Other,setup\n\
             https://b,Cost?,,,Other,pricing\n",
        )
        .unwrap();

        let rows = read_labelled_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].question, "How to install?");
        assert_eq!(rows[0].intent.as_deref(), Some("setup"));
        assert_eq!(rows[1].position, 1);
        assert_eq!(rows[1].answer, "");
    }

    #[test]
    fn test_clean_output_reads_back_without_intent() {
        let dir = TempDir::new().unwrap();
        let partition = Partition {
            clean: vec![classified(
                RawRecord::new(Some("https://a"), Some("Q"), None, Some("a long enough answer")),
                Reason::Other,
            )],
            unclean: Vec::new(),
        };
        let clean = dir.path().join("clean.csv");
        write_partition(&partition, &clean, &dir.path().join("unclean.csv")).unwrap();

        let rows = read_labelled_rows(&clean).unwrap();
        assert_eq!(rows[0].answer, "a long enough answer");
        assert_eq!(rows[0].intent, None);
    }

    #[test]
    fn test_missing_answer_column() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("intents.csv");
        fs::write(&path, "question,intent\nQ,setup\n").unwrap();

        let err = read_labelled_rows(&path).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn { ref column, .. } if column == "answer"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(read_labelled_rows(&dir.path().join("nope.csv")).unwrap_err().is_input_missing());
    }
}
