//! Chat round-trip handler.
//!
//! The receiving side of a chat request: resolves the scope from the store,
//! runs the guide, records the exchange and returns the answer. The record
//! write is not awaited.

use crate::interaction_logger::InteractionLogger;
use isla_core::assistant::Guide;
use isla_core::chat::{ChatRequest, ChatResponse};
use isla_core::error::Result;
use isla_core::island::IslandRepository;
use isla_core::scope::ScopeSnapshot;
use isla_core::species::SpeciesRepository;
use std::sync::Arc;

pub struct ChatService {
    island_repository: Arc<dyn IslandRepository>,
    species_repository: Arc<dyn SpeciesRepository>,
    guide: Guide,
    logger: InteractionLogger,
}

impl ChatService {
    pub fn new(
        island_repository: Arc<dyn IslandRepository>,
        species_repository: Arc<dyn SpeciesRepository>,
        guide: Guide,
        logger: InteractionLogger,
    ) -> Self {
        Self {
            island_repository,
            species_repository,
            guide,
            logger,
        }
    }

    /// Answers one question.
    ///
    /// # Errors
    ///
    /// Returns an error when the island or catalog lookup fails. A failed
    /// species lookup only empties the species list.
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse> {
        let snapshot = self.resolve(request.location_id.as_deref()).await?;
        let answer = self.guide.answer(&request.question, &snapshot);

        tracing::info!(
            target: "chat",
            session_id = %request.session_id,
            island_id = ?request.location_id,
            intent = %answer.intent,
            "Question answered"
        );

        // Not awaited here; `drain` collects it
        let _ = self.logger.log(
            &request.session_id,
            request.location_id.clone(),
            &request.question,
            &answer,
        );

        Ok(ChatResponse {
            response: answer.text,
        })
    }

    /// Waits for interaction records still being written.
    pub async fn drain(&self) {
        self.logger.drain().await;
    }

    async fn resolve(&self, island_id: Option<&str>) -> Result<ScopeSnapshot> {
        let Some(island_id) = island_id else {
            return Ok(ScopeSnapshot::Global {
                islands: self.island_repository.list_ordered().await?,
            });
        };

        let island = self.island_repository.find_by_id(island_id).await?;
        if island.is_none() {
            tracing::debug!(target: "chat", island_id, "No island record for requested scope");
        }

        let species = self
            .species_repository
            .list_by_island(island_id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(target: "chat", island_id, "Failed to load species: {}", e);
                Vec::new()
            });

        Ok(ScopeSnapshot::Island {
            island_id: island_id.to_string(),
            island,
            species,
        })
    }
}
