//! Extinct species domain model.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Fallback gradient for species without animation colors.
pub const DEFAULT_PALETTE: [&str; 2] = ["#3b82f6", "#60a5fa"];

/// The closed set of species categories.
///
/// Values outside the set deserialize to `Unrecognized`, which only ever
/// selects the default presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SpeciesCategory {
    Bird,
    Marine,
    Reptile,
    Mammal,
    Unrecognized,
}

impl<'de> Deserialize<'de> for SpeciesCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl SpeciesCategory {
    /// Glyph used for the featured creature badge.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Bird => "🦅",
            Self::Marine => "🐋",
            Self::Reptile => "🦎",
            Self::Mammal => "🦘",
            Self::Unrecognized => "🌿",
        }
    }

    /// Parses a raw category tag, failing closed to `Unrecognized`.
    pub fn from_tag(tag: &str) -> Self {
        tag.trim()
            .to_lowercase()
            .parse()
            .unwrap_or(Self::Unrecognized)
    }
}

/// Presentation hints for the animated creature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationHint {
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub movements: Option<Vec<String>>,
    #[serde(default)]
    pub size: Option<String>,
}

impl AnimationHint {
    /// Returns the two gradient stops for the creature badge.
    ///
    /// Missing colors fall back to [`DEFAULT_PALETTE`]; a single color is
    /// used for both stops.
    pub fn gradient(&self) -> (String, String) {
        match self.colors.as_deref() {
            Some([first, second, ..]) => (first.clone(), second.clone()),
            Some([only]) => (only.clone(), only.clone()),
            _ => (DEFAULT_PALETTE[0].to_string(), DEFAULT_PALETTE[1].to_string()),
        }
    }
}

/// A species once native to an island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtinctSpecies {
    pub id: String,
    /// Owning island; orphaned species carry `None`.
    #[serde(default)]
    pub island_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(rename = "type")]
    pub category: SpeciesCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub extinction_year: Option<i32>,
    #[serde(default)]
    pub extinction_cause: Option<String>,
    #[serde(default)]
    pub narration_text: Option<String>,
    #[serde(default)]
    pub narration_audio_url: Option<String>,
    #[serde(default, rename = "animation_config")]
    pub animation: AnimationHint,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

impl ExtinctSpecies {
    /// Whether this species belongs to the given island.
    pub fn belongs_to(&self, island_id: &str) -> bool {
        self.island_id.as_deref() == Some(island_id)
    }
}
