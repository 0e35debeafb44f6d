//! Domain layer for ISLA.
//!
//! Holds the island and species model, the repository interfaces the rest of
//! the workspace depends on, and the contextual guide: intent classification,
//! context building and answer selection. Nothing in this crate performs I/O.

pub mod assistant;
pub mod chat;
pub mod error;
pub mod island;
pub mod scope;
pub mod species;

pub use error::IslaError;
