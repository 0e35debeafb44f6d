//! TOML file-based catalog repository.
//!
//! The file is re-read on every call so external edits show up on the next
//! catalog reload.

use crate::catalog::CatalogDocument;
use async_trait::async_trait;
use isla_core::error::{IslaError, Result};
use isla_core::island::{Island, IslandRepository};
use isla_core::species::{ExtinctSpecies, SpeciesRepository};
use std::path::{Path, PathBuf};

/// Catalog store backed by one TOML document (see [`CatalogDocument`]).
#[derive(Debug, Clone)]
pub struct TomlCatalogRepository {
    path: PathBuf,
}

impl TomlCatalogRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<CatalogDocument> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            IslaError::data_access(format!(
                "Failed to read catalog at {}: {}",
                self.path.display(),
                e
            ))
        })?;
        CatalogDocument::parse(&content)
    }
}

#[async_trait]
impl IslandRepository for TomlCatalogRepository {
    async fn list_ordered(&self) -> Result<Vec<Island>> {
        Ok(self.load().await?.ordered_islands())
    }

    async fn find_by_id(&self, island_id: &str) -> Result<Option<Island>> {
        Ok(self.load().await?.find_island(island_id))
    }
}

#[async_trait]
impl SpeciesRepository for TomlCatalogRepository {
    async fn list_by_island(&self, island_id: &str) -> Result<Vec<ExtinctSpecies>> {
        Ok(self.load().await?.species_of(island_id))
    }

    async fn list_all(&self) -> Result<Vec<ExtinctSpecies>> {
        Ok(self.load().await?.species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
        [[island]]
        id = "second"
        name = "Second"
        latitude = 10.0
        longitude = 20.0
        order_index = 2

        [[island]]
        id = "first"
        name = "First"
        latitude = -1.0
        longitude = 2.0
        climate = "Mild"
        order_index = 1

        [[species]]
        id = "s1"
        island_id = "first"
        name = "Species One"
        type = "bird"

        [[species]]
        id = "s2"
        name = "Orphan"
        type = "dinosaur"
    "#;

    fn create_test_repository() -> (TomlCatalogRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.toml");
        std::fs::write(&path, CATALOG).unwrap();
        (TomlCatalogRepository::with_path(path), temp_dir)
    }

    #[tokio::test]
    async fn test_list_ordered() {
        let (repo, _temp_dir) = create_test_repository();
        let islands = repo.list_ordered().await.unwrap();
        let names: Vec<_> = islands.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let (repo, _temp_dir) = create_test_repository();
        let island = repo.find_by_id("first").await.unwrap().unwrap();
        assert_eq!(island.climate.as_deref(), Some("Mild"));
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_species_queries_tolerate_orphans_and_unknown_types() {
        let (repo, _temp_dir) = create_test_repository();
        let species = repo.list_by_island("first").await.unwrap();
        assert_eq!(species.len(), 1);
        assert!(repo.list_by_island("second").await.unwrap().is_empty());

        let all = SpeciesRepository::list_all(&repo).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|s| s.island_id.is_none()));
    }

    #[tokio::test]
    async fn test_missing_file_is_data_access_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlCatalogRepository::with_path(temp_dir.path().join("absent.toml"));
        let err = repo.list_ordered().await.unwrap_err();
        assert!(matches!(err, IslaError::DataAccess(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.toml");
        std::fs::write(&path, "[[island]]\nname = 3").unwrap();
        let repo = TomlCatalogRepository::with_path(path);
        let err = repo.list_ordered().await.unwrap_err();
        assert!(matches!(err, IslaError::Serialization { .. }));
    }
}
