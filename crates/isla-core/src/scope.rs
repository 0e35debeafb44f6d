//! What the user is currently looking at.
//!
//! `CurrentScope` is the lightweight key carried over the chat boundary;
//! `ScopeSnapshot` is the record data the context builder reads from.

use crate::island::Island;
use crate::species::ExtinctSpecies;
use serde::{Deserialize, Serialize};

/// The current scope: the whole catalog, or one island.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "island_id", rename_all = "snake_case")]
pub enum CurrentScope {
    /// No island selected.
    #[default]
    Global,
    /// Bound to one island.
    Island(String),
}

impl CurrentScope {
    /// The bound island ID, if any.
    pub fn island_id(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Island(id) => Some(id),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl From<Option<String>> for CurrentScope {
    fn from(island_id: Option<String>) -> Self {
        island_id.map_or(Self::Global, Self::Island)
    }
}

/// Already-fetched records for a scope, captured at one instant.
///
/// Snapshots are owned copies, so a scope change after capture never leaks
/// into an exchange that already started.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeSnapshot {
    /// The full catalog.
    Global { islands: Vec<Island> },
    /// One island and its species.
    ///
    /// `island` is `None` when the bound ID has no record in the store.
    Island {
        island_id: String,
        island: Option<Island>,
        species: Vec<ExtinctSpecies>,
    },
}
