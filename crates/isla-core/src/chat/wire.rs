//! Chat round-trip bodies.
//!
//! Field names follow the JSON contract of the chat endpoint (camelCase).

use serde::{Deserialize, Serialize};

/// Body returned by the handler when it cannot produce an answer.
pub const HANDLER_ERROR_MESSAGE: &str = "An error occurred processing your request";

/// A question sent to the chat handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    /// The island in scope when the question was asked.
    #[serde(default, alias = "islandId")]
    pub location_id: Option<String>,
    pub session_id: String,
}

/// Successful handler reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error reply that accompanies a failure status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatErrorBody {
    pub error: String,
}

impl Default for ChatErrorBody {
    fn default() -> Self {
        Self {
            error: HANDLER_ERROR_MESSAGE.to_string(),
        }
    }
}
