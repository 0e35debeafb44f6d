//! Structured context for answer selection.

use crate::island::{Island, IslandField};
use crate::scope::ScopeSnapshot;
use crate::species::{ExtinctSpecies, SpeciesCategory};
use std::fmt;

const DEFAULT_MAX_ISLANDS: usize = 32;
const DEFAULT_MAX_SPECIES: usize = 32;

/// A context value that is either known or explicitly unknown.
///
/// Optional store fields never disappear from the context; they become
/// `Fact::Unknown` so consumers can test presence uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fact {
    Known(String),
    #[default]
    Unknown,
}

impl Fact {
    /// Blank text counts as unknown.
    /// Known text is kept verbatim, surrounding whitespace included.
    pub fn from_text(value: Option<&str>) -> Self {
        match value {
            Some(text) if !text.trim().is_empty() => Self::Known(text.to_string()),
            _ => Self::Unknown,
        }
    }

    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(text) => Some(text.as_str()),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(text) => f.write_str(text),
            Self::Unknown => f.write_str("N/A"),
        }
    }
}

/// Narrative facts about the island in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IslandFacts {
    pub id: String,
    pub name: Fact,
    pub climate: Fact,
    pub terrain: Fact,
    pub history: Fact,
    pub biodiversity: Fact,
    pub cultural_significance: Fact,
}

impl IslandFacts {
    fn from_island(island: &Island) -> Self {
        Self {
            id: island.id.clone(),
            name: Fact::from_text(Some(&island.name)),
            climate: Fact::from_text(island.field(IslandField::Climate)),
            terrain: Fact::from_text(island.field(IslandField::Terrain)),
            history: Fact::from_text(island.field(IslandField::History)),
            biodiversity: Fact::from_text(island.field(IslandField::Biodiversity)),
            cultural_significance: Fact::from_text(
                island.field(IslandField::CulturalSignificance),
            ),
        }
    }

    /// Facts for an island ID with no record behind it.
    fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Fact::Unknown,
            climate: Fact::Unknown,
            terrain: Fact::Unknown,
            history: Fact::Unknown,
            biodiversity: Fact::Unknown,
            cultural_significance: Fact::Unknown,
        }
    }

    /// Direct field lookup.
    pub fn get(&self, field: IslandField) -> &Fact {
        match field {
            IslandField::Climate => &self.climate,
            IslandField::Terrain => &self.terrain,
            IslandField::History => &self.history,
            IslandField::Biodiversity => &self.biodiversity,
            IslandField::CulturalSignificance => &self.cultural_significance,
        }
    }
}

/// Facts about one species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesFacts {
    pub name: String,
    pub scientific_name: Fact,
    pub category: SpeciesCategory,
    pub description: Fact,
    pub extinction_year: Fact,
    pub extinction_cause: Fact,
}

impl From<&ExtinctSpecies> for SpeciesFacts {
    fn from(species: &ExtinctSpecies) -> Self {
        Self {
            name: species.name.clone(),
            scientific_name: Fact::from_text(species.scientific_name.as_deref()),
            category: species.category,
            description: Fact::from_text(species.description.as_deref()),
            extinction_year: species
                .extinction_year
                .map_or(Fact::Unknown, |year| Fact::Known(year.to_string())),
            extinction_cause: Fact::from_text(species.extinction_cause.as_deref()),
        }
    }
}

/// Name and position of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandSummary {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The context slice handed to a [`Responder`](super::Responder).
#[derive(Debug, Clone, PartialEq)]
pub enum ChatContext {
    /// No island selected: names and coordinates of the catalog.
    Global { islands: Vec<IslandSummary> },
    /// One island and its species.
    Island {
        island: IslandFacts,
        species: Vec<SpeciesFacts>,
    },
}

impl ChatContext {
    /// Island facts when bound to an island.
    pub fn island(&self) -> Option<&IslandFacts> {
        match self {
            Self::Island { island, .. } => Some(island),
            Self::Global { .. } => None,
        }
    }

    /// Species in scope; always empty for the global context.
    pub fn species(&self) -> &[SpeciesFacts] {
        match self {
            Self::Island { species, .. } => species,
            Self::Global { .. } => &[],
        }
    }

    /// Whether the context is bound to an island.
    pub fn is_island(&self) -> bool {
        matches!(self, Self::Island { .. })
    }
}

/// Flattened text form, suitable as a prompt for a model-backed responder.
impl fmt::Display for ChatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global { islands } => {
                writeln!(f, "Available islands:")?;
                for island in islands {
                    writeln!(
                        f,
                        "- {} (Lat: {}, Lng: {})",
                        island.name, island.latitude, island.longitude
                    )?;
                }
            }
            Self::Island { island, species } => {
                writeln!(f, "Current island: {}", island.name)?;
                writeln!(f, "Climate: {}", island.climate)?;
                writeln!(f, "Terrain: {}", island.terrain)?;
                writeln!(f, "History: {}", island.history)?;
                writeln!(f, "Biodiversity: {}", island.biodiversity)?;
                writeln!(f, "Cultural Significance: {}", island.cultural_significance)?;
                if !species.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Extinct species on this island:")?;
                    for sp in species {
                        writeln!(f, "- {} ({}): {}", sp.name, sp.scientific_name, sp.description)?;
                        writeln!(
                            f,
                            "  Type: {}, Extinct: {}, Cause: {}",
                            sp.category, sp.extinction_year, sp.extinction_cause
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Assembles a bounded [`ChatContext`] from a [`ScopeSnapshot`].
///
/// Building works on already-fetched records only.
#[derive(Debug, Clone, Copy)]
pub struct ContextBuilder {
    max_islands: usize,
    max_species: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            max_islands: DEFAULT_MAX_ISLANDS,
            max_species: DEFAULT_MAX_SPECIES,
        }
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of catalog entries in a global context.
    pub fn with_max_islands(mut self, max_islands: usize) -> Self {
        self.max_islands = max_islands;
        self
    }

    /// Caps the number of species in an island context.
    pub fn with_max_species(mut self, max_species: usize) -> Self {
        self.max_species = max_species;
        self
    }

    pub fn build(&self, snapshot: &ScopeSnapshot) -> ChatContext {
        match snapshot {
            ScopeSnapshot::Global { islands } => ChatContext::Global {
                islands: islands
                    .iter()
                    .take(self.max_islands)
                    .map(|island| IslandSummary {
                        name: island.name.clone(),
                        latitude: island.latitude,
                        longitude: island.longitude,
                    })
                    .collect(),
            },
            ScopeSnapshot::Island {
                island_id,
                island,
                species,
            } => ChatContext::Island {
                island: island
                    .as_ref()
                    .map_or_else(|| IslandFacts::unknown(island_id), IslandFacts::from_island),
                species: species
                    .iter()
                    .take(self.max_species)
                    .map(SpeciesFacts::from)
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::AnimationHint;

    fn island(id: &str, order: i32) -> Island {
        Island {
            id: id.to_string(),
            name: format!("Island {id}"),
            latitude: 1.5,
            longitude: -2.25,
            climate: Some("Warm".to_string()),
            terrain: Some("".to_string()),
            history: None,
            biodiversity: Some("Rich".to_string()),
            cultural_significance: None,
            background_video_url: None,
            images: Vec::new(),
            order_index: order,
        }
    }

    fn species(name: &str) -> ExtinctSpecies {
        ExtinctSpecies {
            id: name.to_lowercase(),
            island_id: Some("a".to_string()),
            name: name.to_string(),
            scientific_name: None,
            category: SpeciesCategory::Bird,
            description: Some("Flightless".to_string()),
            extinction_year: Some(1681),
            extinction_cause: None,
            narration_text: None,
            narration_audio_url: None,
            animation: AnimationHint::default(),
            images: Vec::new(),
            wikipedia_url: None,
        }
    }

    #[test]
    fn test_global_context_lists_names_and_coordinates() {
        let snapshot = ScopeSnapshot::Global {
            islands: vec![island("a", 1), island("b", 2)],
        };
        let context = ContextBuilder::new().build(&snapshot);
        match &context {
            ChatContext::Global { islands } => {
                assert_eq!(islands.len(), 2);
                assert_eq!(islands[0].name, "Island a");
                assert_eq!(islands[1].longitude, -2.25);
            }
            other => panic!("unexpected context: {other:?}"),
        }
        assert!(context.species().is_empty());
        assert!(context.island().is_none());
    }

    #[test]
    fn test_island_context_marks_missing_fields_unknown() {
        let snapshot = ScopeSnapshot::Island {
            island_id: "a".to_string(),
            island: Some(island("a", 1)),
            species: vec![species("Dodo")],
        };
        let context = ContextBuilder::new().build(&snapshot);
        let facts = context.island().unwrap();
        assert_eq!(facts.get(IslandField::Climate).as_known(), Some("Warm"));
        assert_eq!(facts.get(IslandField::Terrain), &Fact::Unknown);
        assert_eq!(facts.get(IslandField::History), &Fact::Unknown);

        let dodo = &context.species()[0];
        assert_eq!(dodo.extinction_year, Fact::Known("1681".to_string()));
        assert_eq!(dodo.scientific_name, Fact::Unknown);
        assert_eq!(dodo.extinction_cause, Fact::Unknown);
    }

    #[test]
    fn test_fact_keeps_known_text_verbatim() {
        assert_eq!(
            Fact::from_text(Some("  Tropical, humid.\n")),
            Fact::Known("  Tropical, humid.\n".to_string())
        );
        assert_eq!(Fact::from_text(Some(" \t\n")), Fact::Unknown);
        assert_eq!(Fact::from_text(None), Fact::Unknown);
    }

    #[test]
    fn test_missing_island_record_yields_unknown_facts() {
        let snapshot = ScopeSnapshot::Island {
            island_id: "ghost".to_string(),
            island: None,
            species: Vec::new(),
        };
        let context = ContextBuilder::new().build(&snapshot);
        let facts = context.island().unwrap();
        assert_eq!(facts.id, "ghost");
        assert!(!facts.name.is_known());
        assert!(!facts.climate.is_known());
    }

    #[test]
    fn test_builder_bounds_the_slice() {
        let snapshot = ScopeSnapshot::Island {
            island_id: "a".to_string(),
            island: Some(island("a", 1)),
            species: vec![species("One"), species("Two"), species("Three")],
        };
        let context = ContextBuilder::new().with_max_species(2).build(&snapshot);
        assert_eq!(context.species().len(), 2);

        let global = ScopeSnapshot::Global {
            islands: (0..5).map(|i| island(&i.to_string(), i)).collect(),
        };
        match ContextBuilder::new().with_max_islands(3).build(&global) {
            ChatContext::Global { islands } => assert_eq!(islands.len(), 3),
            other => panic!("unexpected context: {other:?}"),
        }
    }

    #[test]
    fn test_display_renders_prompt_text() {
        let snapshot = ScopeSnapshot::Island {
            island_id: "a".to_string(),
            island: Some(island("a", 1)),
            species: vec![species("Dodo")],
        };
        let text = ContextBuilder::new().build(&snapshot).to_string();
        assert!(text.contains("Current island: Island a\n"));
        assert!(text.contains("Terrain: N/A\n"));
        assert!(text.contains("Extinct species on this island:\n"));
        assert!(text.contains("- Dodo (N/A): Flightless\n"));
        assert!(text.contains("Type: bird, Extinct: 1681, Cause: N/A"));
    }
}
