// ============================================================
// Layer 3 — Dialogue Training Records
// ============================================================
// The shape the fine-tuning harness consumes, one JSON object per
// line:
//
//   {"id":1,"intent":"setup","messages":[
//       {"role":"user","content":"How do I ..."},
//       {"role":"assistant","content":"Run ..."}]}

use serde::{Deserialize, Serialize};

use crate::domain::intent::Intent;

/// One row of the intent-labelled CSV, reduced to what the builder reads.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledRow {
    /// Zero-based position of the row in the input file
    pub position: usize,
    pub question: String,
    pub answer:   String,
    /// Raw intent cell; None when the column is absent
    pub intent:   Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role:    Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub id:       usize,
    pub intent:   Intent,
    pub messages: Vec<Message>,
}

impl DialogueRecord {
    /// A single user question followed by the assistant's answer.
    pub fn exchange(
        id:       usize,
        intent:   Intent,
        question: impl Into<String>,
        answer:   impl Into<String>,
    ) -> Self {
        Self {
            id,
            intent,
            messages: vec![
                Message { role: Role::User,      content: question.into() },
                Message { role: Role::Assistant, content: answer.into() },
            ],
        }
    }
}
