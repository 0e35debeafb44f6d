//! Keyword intent classification.

use crate::island::IslandField;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Topic a question is about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Climate,
    Species,
    History,
    Terrain,
    Culture,
    Unknown,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Ordered rule table; the first rule with a matching keyword wins.
///
/// Climate sits above species, so a question mentioning both is a climate
/// question.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Climate,
        keywords: &["weather", "climate"],
    },
    IntentRule {
        intent: Intent::Species,
        keywords: &["extinct", "species", "animal"],
    },
    IntentRule {
        intent: Intent::History,
        keywords: &["history", "discovered"],
    },
    IntentRule {
        intent: Intent::Terrain,
        keywords: &["terrain", "geography", "landscape"],
    },
    IntentRule {
        intent: Intent::Culture,
        keywords: &["culture", "people"],
    },
];

impl Intent {
    /// Classifies a question by case-insensitive substring match against
    /// [`INTENT_RULES`].
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        INTENT_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| lower.contains(keyword)))
            .map_or(Self::Unknown, |rule| rule.intent)
    }

    /// The island field that answers this intent, for field-backed intents.
    pub fn backing_field(self) -> Option<IslandField> {
        match self {
            Self::Climate => Some(IslandField::Climate),
            Self::History => Some(IslandField::History),
            Self::Terrain => Some(IslandField::Terrain),
            Self::Culture => Some(IslandField::CulturalSignificance),
            Self::Species | Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(Intent::classify("What's the weather like here?"), Intent::Climate);
        assert_eq!(
            Intent::classify("Tell me about the extinct animals"),
            Intent::Species
        );
        assert_eq!(Intent::classify("asdkjasd"), Intent::Unknown);
        assert_eq!(Intent::classify(""), Intent::Unknown);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Intent::classify("CLIMATE?"), Intent::Climate);
        assert_eq!(Intent::classify("Who DISCOVERED it"), Intent::History);
        assert_eq!(Intent::classify("Describe the Landscape"), Intent::Terrain);
        assert_eq!(Intent::classify("What do PEOPLE eat"), Intent::Culture);
    }

    #[test]
    fn test_climate_outranks_species() {
        let questions = [
            "Which species suffered from the climate?",
            "Did the weather kill the extinct animals?",
            "animal climate",
            "SPECIES and WEATHER",
        ];
        for question in questions {
            assert_eq!(Intent::classify(question), Intent::Climate, "{question}");
        }
    }

    #[test]
    fn test_species_outranks_geography_terms() {
        assert_eq!(
            Intent::classify("How did the terrain shape extinct species history?"),
            Intent::Species
        );
        assert_eq!(Intent::classify("history of the people"), Intent::History);
        assert_eq!(Intent::classify("people of this landscape"), Intent::Terrain);
    }

    #[test]
    fn test_substring_matching() {
        // "animals" contains "animal", "cultures" contains "culture"
        assert_eq!(Intent::classify("animals"), Intent::Species);
        assert_eq!(Intent::classify("local cultures"), Intent::Culture);
    }

    #[test]
    fn test_every_rule_is_reachable_in_table_order() {
        for (index, rule) in INTENT_RULES.iter().enumerate() {
            for keyword in rule.keywords {
                assert_eq!(Intent::classify(keyword), rule.intent);
                for earlier in &INTENT_RULES[..index] {
                    let mixed = format!("{} {}", keyword, earlier.keywords[0]);
                    assert_eq!(Intent::classify(&mixed), earlier.intent, "{mixed}");
                }
            }
        }
    }

    #[test]
    fn test_backing_fields() {
        assert_eq!(Intent::Climate.backing_field(), Some(IslandField::Climate));
        assert_eq!(
            Intent::Culture.backing_field(),
            Some(IslandField::CulturalSignificance)
        );
        assert_eq!(Intent::Species.backing_field(), None);
        assert_eq!(Intent::Unknown.backing_field(), None);
    }

    #[test]
    fn test_intent_labels() {
        assert_eq!(Intent::Climate.to_string(), "climate");
        assert_eq!(Intent::Unknown.as_ref(), "unknown");
    }
}
