//! Island domain model.

use serde::{Deserialize, Serialize};
use strum::Display;

/// A location in the catalog.
///
/// Islands are created and updated outside the application; the core treats
/// them as read-only for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Island {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub biodiversity: Option<String>,
    #[serde(default)]
    pub cultural_significance: Option<String>,
    /// Background video shown behind the detail view
    #[serde(default)]
    pub background_video_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Used only for a stable sort of the catalog; need not be contiguous.
    pub order_index: i32,
}

/// The narrative text fields an island may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IslandField {
    Climate,
    Terrain,
    History,
    Biodiversity,
    #[strum(to_string = "Cultural Significance")]
    CulturalSignificance,
}

impl Island {
    /// Returns the text of a narrative field.
    ///
    /// Blank text is reported as absent.
    pub fn field(&self, field: IslandField) -> Option<&str> {
        let value = match field {
            IslandField::Climate => &self.climate,
            IslandField::Terrain => &self.terrain,
            IslandField::History => &self.history,
            IslandField::Biodiversity => &self.biodiversity,
            IslandField::CulturalSignificance => &self.cultural_significance,
        };
        value.as_deref().filter(|text| !text.trim().is_empty())
    }

    /// Formats the coordinates as `Lat: x, Lng: y`.
    pub fn coordinates_label(&self) -> String {
        format!("Lat: {}, Lng: {}", self.latitude, self.longitude)
    }
}
