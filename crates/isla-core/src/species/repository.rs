//! Species repository trait.

use super::model::ExtinctSpecies;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract, read-only repository for extinct species.
#[async_trait]
pub trait SpeciesRepository: Send + Sync {
    /// Lists the species owned by an island. Order is not significant.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<ExtinctSpecies>)`: Possibly empty list
    /// - `Err(_)`: Error occurred during retrieval
    async fn list_by_island(&self, island_id: &str) -> Result<Vec<ExtinctSpecies>>;

    /// Lists every species, including orphans without an owning island.
    async fn list_all(&self) -> Result<Vec<ExtinctSpecies>>;
}
