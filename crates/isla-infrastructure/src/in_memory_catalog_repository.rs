//! In-memory catalog repository.

use crate::catalog::CatalogDocument;
use async_trait::async_trait;
use isla_core::error::Result;
use isla_core::island::{Island, IslandRepository};
use isla_core::species::{ExtinctSpecies, SpeciesRepository};

/// Catalog store holding a fixed document in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    catalog: CatalogDocument,
}

impl InMemoryCatalogRepository {
    pub fn new(catalog: CatalogDocument) -> Self {
        Self { catalog }
    }

    /// Store preloaded with the bundled seed catalog.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(CatalogDocument::seed()?))
    }
}

#[async_trait]
impl IslandRepository for InMemoryCatalogRepository {
    async fn list_ordered(&self) -> Result<Vec<Island>> {
        Ok(self.catalog.ordered_islands())
    }

    async fn find_by_id(&self, island_id: &str) -> Result<Option<Island>> {
        Ok(self.catalog.find_island(island_id))
    }
}

#[async_trait]
impl SpeciesRepository for InMemoryCatalogRepository {
    async fn list_by_island(&self, island_id: &str) -> Result<Vec<ExtinctSpecies>> {
        Ok(self.catalog.species_of(island_id))
    }

    async fn list_all(&self) -> Result<Vec<ExtinctSpecies>> {
        Ok(self.catalog.species.clone())
    }
}
