//! Chat domain module.
//!
//! - `session`: the per-launch correlation key (`ChatSession`)
//! - `message`: transcript entries (`MessageRole`, `ChatMessage`)
//! - `wire`: request/response bodies of the chat round-trip
//! - `interaction`: the write-only interaction record and its sink

mod interaction;
mod message;
mod session;
mod wire;

pub use interaction::{AnswerSource, InteractionRecord, InteractionRepository};
pub use message::{ChatMessage, MessageRole};
pub use session::ChatSession;
pub use wire::{ChatErrorBody, ChatRequest, ChatResponse, HANDLER_ERROR_MESSAGE};
