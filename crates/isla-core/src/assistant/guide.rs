//! Classify → build context → respond.

use super::context::ContextBuilder;
use super::intent::Intent;
use super::responder::{Responder, RuleBasedResponder};
use crate::chat::AnswerSource;
use crate::scope::ScopeSnapshot;
use std::sync::Arc;

/// The guide's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub intent: Intent,
    pub text: String,
    pub source: AnswerSource,
}

/// Runs the answer pipeline against a scope snapshot.
#[derive(Clone)]
pub struct Guide {
    builder: ContextBuilder,
    responder: Arc<dyn Responder>,
}

impl Default for Guide {
    fn default() -> Self {
        Self::new(Arc::new(RuleBasedResponder::new()))
    }
}

impl Guide {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            builder: ContextBuilder::default(),
            responder,
        }
    }

    pub fn answer(&self, question: &str, snapshot: &ScopeSnapshot) -> Answer {
        let intent = Intent::classify(question);
        let context = self.builder.build(snapshot);
        Answer {
            intent,
            text: self.responder.respond(intent, &context),
            source: self.responder.source(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::ChatContext;
    use crate::assistant::fallback;
    use crate::island::Island;

    fn mauritius() -> Island {
        Island {
            id: "mauritius".to_string(),
            name: "Mauritius".to_string(),
            latitude: -20.3,
            longitude: 57.5,
            climate: Some("Tropical maritime with a cyclone season.".to_string()),
            terrain: None,
            history: None,
            biodiversity: None,
            cultural_significance: None,
            background_video_url: None,
            images: Vec::new(),
            order_index: 1,
        }
    }

    #[test]
    fn test_climate_question_returns_island_climate() {
        let snapshot = ScopeSnapshot::Island {
            island_id: "mauritius".to_string(),
            island: Some(mauritius()),
            species: Vec::new(),
        };
        let guide = Guide::default();
        for question in ["climate?", "What is the CLIMATE like", "weather and climate"] {
            let answer = guide.answer(question, &snapshot);
            assert_eq!(answer.intent, Intent::Climate);
            assert_eq!(answer.text, "Tropical maritime with a cyclone season.");
            assert_eq!(answer.source, AnswerSource::InternalDatabase);
        }
    }

    #[test]
    fn test_climate_text_is_not_trimmed() {
        let mut island = mauritius();
        island.climate = Some("  Tropical, humid.\n".to_string());
        let snapshot = ScopeSnapshot::Island {
            island_id: "mauritius".to_string(),
            island: Some(island),
            species: Vec::new(),
        };
        let answer = Guide::default().answer("What is the climate like?", &snapshot);
        assert_eq!(answer.text, "  Tropical, humid.\n");
    }

    #[test]
    fn test_global_snapshot_uses_fallback() {
        let guide = Guide::default();
        let snapshot = ScopeSnapshot::Global {
            islands: vec![mauritius()],
        };
        let answer = guide.answer("Who discovered these islands?", &snapshot);
        assert_eq!(answer.intent, Intent::History);
        assert_eq!(answer.text, fallback::HISTORY);
    }

    struct EchoResponder;

    impl Responder for EchoResponder {
        fn respond(&self, intent: Intent, context: &ChatContext) -> String {
            format!("{intent}:{}", context.is_island())
        }

        fn source(&self) -> AnswerSource {
            AnswerSource::ExternalModel
        }
    }

    #[test]
    fn test_responder_is_pluggable() {
        let guide = Guide::new(Arc::new(EchoResponder));
        let answer = guide.answer("tell me about the people", &ScopeSnapshot::Global {
            islands: Vec::new(),
        });
        assert_eq!(answer.text, "culture:false");
        assert_eq!(answer.source, AnswerSource::ExternalModel);
    }
}
