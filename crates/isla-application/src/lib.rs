//! Application layer for ISLA.
//!
//! Use cases that coordinate the domain with the stores: view state,
//! the chat round-trip handler, transports and the chat transcript.

pub mod chat_panel;
pub mod chat_service;
pub mod explorer;
pub mod interaction_logger;
pub mod transport;
pub mod view_state;

pub use chat_panel::{ChatPanel, SubmitOutcome};
pub use chat_service::ChatService;
pub use explorer::Explorer;
pub use interaction_logger::InteractionLogger;
pub use transport::{ChatTransport, HttpChatTransport, LocalChatTransport};
pub use view_state::{CatalogState, IslandDetail, Selection, ViewStateCoordinator};
