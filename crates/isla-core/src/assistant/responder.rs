//! Answer selection.

use super::context::ChatContext;
use super::intent::Intent;
use crate::chat::AnswerSource;

/// Fixed answer sentences.
pub mod fallback {
    pub const CLIMATE: &str = "The climate varies by island. Some have tropical climates with warm temperatures year-round, while others experience more temperate conditions with distinct seasons.";
    pub const SPECIES_ON_ISLAND: &str = "This island was home to several remarkable extinct species. Each played a unique role in the ecosystem before disappearing due to various factors including habitat loss, introduced predators, and climate change. Would you like to know more about any specific species?";
    pub const SPECIES_GENERAL: &str = "Many islands around the world have lost unique species to extinction. These islands are particularly notable for their endemic species that evolved in isolation and were vulnerable to environmental changes and human activity.";
    pub const HISTORY: &str = "Each island has a rich history of discovery and human interaction. Many were isolated for millennia before contact with explorers, which unfortunately often led to devastating impacts on native species.";
    pub const TERRAIN: &str = "The terrain varies significantly across these islands, from volcanic peaks to lush forests and coastal plains. Each landscape created unique habitats for diverse species.";
    pub const CULTURE: &str = "These islands hold deep cultural significance for their indigenous peoples and continue to be important sites for scientific research and conservation efforts.";
    pub const CATCH_ALL: &str = "That's an interesting question! Feel free to ask me about the climate, terrain, history, biodiversity, cultural significance, or extinct species of these remarkable islands. I'm here to help you explore and learn!";
}

/// Produces answer text from an intent and a context.
///
/// Implementations must be deterministic for a given input. A model-backed
/// implementation can replace [`RuleBasedResponder`] without touching
/// context building or the view state.
pub trait Responder: Send + Sync {
    fn respond(&self, intent: Intent, context: &ChatContext) -> String;

    /// Source tag recorded alongside every answer.
    fn source(&self) -> AnswerSource;
}

/// Picks store fields verbatim, falling back to fixed sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    pub fn new() -> Self {
        Self
    }

    fn fallback_for(intent: Intent) -> &'static str {
        match intent {
            Intent::Climate => fallback::CLIMATE,
            Intent::Species => fallback::SPECIES_GENERAL,
            Intent::History => fallback::HISTORY,
            Intent::Terrain => fallback::TERRAIN,
            Intent::Culture => fallback::CULTURE,
            Intent::Unknown => fallback::CATCH_ALL,
        }
    }
}

impl Responder for RuleBasedResponder {
    fn respond(&self, intent: Intent, context: &ChatContext) -> String {
        if intent == Intent::Species {
            let answer = if context.is_island() && !context.species().is_empty() {
                fallback::SPECIES_ON_ISLAND
            } else {
                fallback::SPECIES_GENERAL
            };
            return answer.to_string();
        }

        intent
            .backing_field()
            .zip(context.island())
            .and_then(|(field, island)| island.get(field).as_known())
            .unwrap_or_else(|| Self::fallback_for(intent))
            .to_string()
    }

    fn source(&self) -> AnswerSource {
        AnswerSource::InternalDatabase
    }
}
