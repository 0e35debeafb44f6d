//! Chat transcript and question submission.
//!
//! At most one question is outstanding at a time. A second submission while
//! one is pending is refused without touching the transcript or the
//! transport.

use crate::transport::ChatTransport;
use isla_core::chat::{ChatMessage, ChatRequest, ChatSession};
use isla_core::scope::CurrentScope;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Appended in place of an answer when a round-trip fails.
pub const APOLOGY: &str =
    "I apologize, but I encountered an error. Please try asking your question again.";

/// First transcript entry of a session with no island selected.
pub const GLOBAL_GREETING: &str = "Hello! I'm your guide to the extinct species islands. Ask me anything about the islands, their climate, history, geology, culture, or the extinct species that once lived there.";

/// Transcript entry shown after an island is selected.
pub fn island_welcome(name: &str) -> String {
    format!(
        "Welcome to {name}! I can tell you about this island's climate, terrain, biodiversity, history, cultural significance, and the extinct species that once lived here. What would you like to know?"
    )
}

/// What happened to a submitted question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler answered; the text was appended to the transcript.
    Answered(String),
    /// The round-trip failed; the apology was appended.
    Failed,
    /// Another question is still pending. Nothing changed.
    Busy,
    /// Blank input. Nothing changed.
    Empty,
    /// The transcript was reset (new island selected) while the question was
    /// pending. The reply was dropped.
    Superseded,
}

/// Visible messages plus a counter bumped on every reset.
#[derive(Debug)]
struct Transcript {
    messages: Vec<ChatMessage>,
    epoch: u64,
}

impl Transcript {
    fn starting_with(message: ChatMessage) -> Self {
        Self {
            messages: vec![message],
            epoch: 0,
        }
    }
}

#[derive(Clone)]
pub struct ChatPanel {
    session: ChatSession,
    transport: Arc<dyn ChatTransport>,
    transcript: Arc<RwLock<Transcript>>,
    in_flight: Arc<AtomicBool>,
    timeout: Duration,
}

/// Clears the in-flight flag however the submission ends.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ChatPanel {
    pub fn new(transport: Arc<dyn ChatTransport>, timeout: Duration) -> Self {
        Self {
            session: ChatSession::start(),
            transport,
            transcript: Arc::new(RwLock::new(Transcript::starting_with(
                ChatMessage::assistant(GLOBAL_GREETING),
            ))),
            in_flight: Arc::new(AtomicBool::new(false)),
            timeout,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn is_awaiting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.messages.clone()
    }

    /// Resets the transcript to the island's welcome message.
    ///
    /// `None` (selection cleared) leaves the transcript as is. A reply to a
    /// question asked before the reset is not appended.
    pub async fn welcome(&self, island_name: Option<&str>) {
        if let Some(name) = island_name {
            let mut transcript = self.transcript.write().await;
            transcript.epoch += 1;
            transcript.messages.clear();
            transcript
                .messages
                .push(ChatMessage::assistant(island_welcome(name)));
        }
    }

    /// Waits for the transport's pending side work.
    pub async fn drain(&self) {
        self.transport.drain().await;
    }

    /// Sends one question scoped to `scope` and appends the outcome.
    pub async fn submit(&self, input: &str, scope: CurrentScope) -> SubmitOutcome {
        let question = input.trim();
        if question.is_empty() {
            return SubmitOutcome::Empty;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(target: "chat", "Submission ignored while awaiting a response");
            return SubmitOutcome::Busy;
        }
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));

        let epoch = {
            let mut transcript = self.transcript.write().await;
            transcript.messages.push(ChatMessage::user(question));
            transcript.epoch
        };

        let request = ChatRequest {
            question: question.to_string(),
            location_id: scope.island_id().map(str::to_string),
            session_id: self.session.id.clone(),
        };

        let result = tokio::time::timeout(self.timeout, self.transport.send(request)).await;
        let reply = match result {
            Ok(Ok(response)) => Some(response.response),
            Ok(Err(e)) if e.is_transport() => {
                tracing::warn!(target: "chat", "Chat request failed: {}", e);
                None
            }
            Ok(Err(e)) => {
                tracing::error!(target: "chat", "Chat request failed unexpectedly: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    target: "chat",
                    timeout_secs = self.timeout.as_secs(),
                    "Chat request timed out"
                );
                None
            }
        };

        let mut transcript = self.transcript.write().await;
        if transcript.epoch != epoch {
            tracing::debug!(target: "chat", "Dropping reply to a question from a reset transcript");
            return SubmitOutcome::Superseded;
        }
        match reply {
            Some(text) => {
                transcript.messages.push(ChatMessage::assistant(text.clone()));
                SubmitOutcome::Answered(text)
            }
            None => {
                transcript.messages.push(ChatMessage::assistant(APOLOGY));
                SubmitOutcome::Failed
            }
        }
    }
}
