//! Interaction records written to the external store.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Where an answer came from.
///
/// Every record states its source so readers can tell generated answers
/// from ones drawn from a live model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerSource {
    /// Selected by the rule-based guide from store records.
    InternalDatabase,
    /// Produced by an external language model.
    ExternalModel,
}

/// One question/answer exchange, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub session_id: String,
    pub island_id: Option<String>,
    pub user_question: String,
    pub ai_response: String,
    pub sources: AnswerSource,
    /// When the record was created (ISO 8601 format)
    pub created_at: String,
}

impl InteractionRecord {
    pub fn new(
        session_id: impl Into<String>,
        island_id: Option<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        source: AnswerSource,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            island_id,
            user_question: question.into(),
            ai_response: answer.into(),
            sources: source,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write-only sink for interaction records.
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Appends a record.
    async fn append(&self, record: &InteractionRecord) -> Result<()>;
}
