//! Catalog document format shared by the file and in-memory stores.
//!
//! ```toml
//! [[island]]
//! id = "mauritius"
//! name = "Mauritius"
//! latitude = -20.3484
//! longitude = 57.5522
//! order_index = 1
//!
//! [[species]]
//! id = "dodo"
//! island_id = "mauritius"
//! name = "Dodo"
//! type = "bird"
//! ```

use isla_core::error::Result;
use isla_core::island::Island;
use isla_core::species::ExtinctSpecies;
use serde::{Deserialize, Serialize};

/// Catalog shipped with the binary.
const SEED_CATALOG: &str = include_str!("../assets/catalog.toml");

/// Islands and species as stored in one TOML document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, rename = "island")]
    pub islands: Vec<Island>,
    #[serde(default)]
    pub species: Vec<ExtinctSpecies>,
}

impl CatalogDocument {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The bundled seed catalog.
    pub fn seed() -> Result<Self> {
        Self::parse(SEED_CATALOG)
    }

    /// Islands sorted by `order_index`; ties keep document order.
    pub fn ordered_islands(&self) -> Vec<Island> {
        let mut islands = self.islands.clone();
        islands.sort_by_key(|island| island.order_index);
        islands
    }

    pub fn find_island(&self, island_id: &str) -> Option<Island> {
        self.islands
            .iter()
            .find(|island| island.id == island_id)
            .cloned()
    }

    pub fn species_of(&self, island_id: &str) -> Vec<ExtinctSpecies> {
        self.species
            .iter()
            .filter(|species| species.belongs_to(island_id))
            .cloned()
            .collect()
    }
}
