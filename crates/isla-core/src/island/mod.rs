//! Island domain module.
//!
//! - `model`: the `Island` record and its narrative fields
//! - `repository`: read access to the island catalog

mod model;
mod repository;

pub use model::{Island, IslandField};
pub use repository::IslandRepository;
