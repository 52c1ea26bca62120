// ============================================================
// Layer 4 — Dialogue Builder
// ============================================================
// Turns intent-labelled rows into dialogue training records.
//
//   LabelledRow { position, question, answer, intent }
//       │  drop rows whose answer is blank
//       │  resolve the intent label (blank/unknown → general_query)
//       ▼
//   DialogueRecord { id: position + 1, intent, [user, assistant] }
//
// Ids come from the row position, so dropped rows leave gaps.

use std::collections::BTreeMap;

use crate::domain::dialogue::{DialogueRecord, LabelledRow};
use crate::domain::intent::Intent;

/// Resolve an intent cell to a label, falling back to GeneralQuery.
pub fn resolve_intent(cell: Option<&str>) -> Intent {
    let Some(raw) = cell.map(str::trim).filter(|c| !c.is_empty()) else {
        return Intent::GeneralQuery;
    };

    match raw.parse::<Intent>() {
        Ok(intent) => intent,
        Err(e) => {
            tracing::warn!("{e}, using '{}'", Intent::GeneralQuery);
            Intent::GeneralQuery
        }
    }
}

/// Build one dialogue record per row that has an answer.
pub fn build_dialogues(rows: Vec<LabelledRow>) -> Vec<DialogueRecord> {
    let total = rows.len();

    let dialogues: Vec<DialogueRecord> = rows
        .into_iter()
        .filter(|row| !row.answer.trim().is_empty())
        .map(|row| {
            let intent = resolve_intent(row.intent.as_deref());
            DialogueRecord::exchange(row.position + 1, intent, row.question, row.answer)
        })
        .collect();

    if dialogues.len() < total {
        tracing::info!("Dropped {} rows without an answer", total - dialogues.len());
    }
    dialogues
}

/// How many dialogues carry each intent, in label order.
pub fn intent_distribution(dialogues: &[DialogueRecord]) -> BTreeMap<Intent, usize> {
    let mut counts = BTreeMap::new();
    for d in dialogues {
        *counts.entry(d.intent).or_insert(0) += 1;
    }
    counts
}
