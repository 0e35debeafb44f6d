//! Front-end façade: the view state plus the chat panel.
//!
//! Selection changes go through here so the transcript welcome and the
//! species list move together.

use crate::chat_panel::{ChatPanel, SubmitOutcome};
use crate::view_state::{CatalogState, IslandDetail, Selection, ViewStateCoordinator};
use isla_core::error::Result;
use isla_core::island::Island;
use isla_core::scope::CurrentScope;
use std::sync::Arc;

#[derive(Clone)]
pub struct Explorer {
    coordinator: Arc<ViewStateCoordinator>,
    chat: ChatPanel,
}

impl Explorer {
    pub fn new(coordinator: Arc<ViewStateCoordinator>, chat: ChatPanel) -> Self {
        Self { coordinator, chat }
    }

    /// Loads the catalog once at startup.
    pub async fn start(&self) -> Result<Vec<Island>> {
        self.coordinator.load_catalog().await
    }

    pub async fn reload(&self) -> Result<Vec<Island>> {
        self.coordinator.reload().await
    }

    pub async fn catalog_state(&self) -> CatalogState {
        self.coordinator.catalog_state().await
    }

    /// Selects an island and resets the transcript to its welcome message.
    pub async fn select_island(&self, island_id: &str) -> Result<Selection> {
        let selection = self.coordinator.select(island_id).await?;
        self.chat.welcome(Some(selection.island.name.as_str())).await;
        Ok(selection)
    }

    /// Returns to global scope. The transcript is kept.
    pub async fn close_island(&self) {
        self.coordinator.clear().await;
        self.chat.welcome(None).await;
    }

    /// Asks a question in the scope current at the moment of asking.
    pub async fn ask(&self, question: &str) -> SubmitOutcome {
        let scope: CurrentScope = self.coordinator.current_scope().await;
        tracing::debug!(target: "view_state", scope = ?scope, "Submitting question");
        self.chat.submit(question, scope).await
    }

    /// Flushes pending interaction records. Call before the runtime stops.
    pub async fn shutdown(&self) {
        self.chat.drain().await;
    }

    pub async fn detail(&self) -> Option<IslandDetail> {
        self.coordinator.detail().await
    }

    pub fn coordinator(&self) -> &Arc<ViewStateCoordinator> {
        &self.coordinator
    }

    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }
}
