//! Island repository trait.
//!
//! Defines read access to the island catalog held by the knowledge store.

use super::model::Island;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract, read-only repository for islands.
///
/// Decouples the application from the specific store (a TOML file, an
/// in-memory seed, a remote database).
#[async_trait]
pub trait IslandRepository: Send + Sync {
    /// Lists every island, ordered by `order_index`.
    ///
    /// Islands sharing an `order_index` keep their storage order.
    async fn list_ordered(&self) -> Result<Vec<Island>>;

    /// Finds an island by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Island))`: Island found
    /// - `Ok(None)`: Island not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, island_id: &str) -> Result<Option<Island>>;
}
