//! Transports that carry a chat request to the handler.
//!
//! The chat panel only talks to [`ChatTransport`]; whether the handler runs
//! in-process or behind an HTTP endpoint is a wiring decision.

mod http;
mod local;

pub use http::HttpChatTransport;
pub use local::LocalChatTransport;

use async_trait::async_trait;
use isla_core::chat::{ChatRequest, ChatResponse};
use isla_core::error::Result;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Delivers one request and waits for the handler's answer.
    ///
    /// # Errors
    ///
    /// Returns [`isla_core::IslaError::Transport`] for any failure status or
    /// delivery problem.
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Waits for side work the transport started on this side of the
    /// boundary (interaction records of an in-process handler).
    async fn drain(&self) {}
}
