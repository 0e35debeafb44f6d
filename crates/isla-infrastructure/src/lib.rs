//! Store adapters and configuration for ISLA.

pub mod catalog;
pub mod config_service;
pub mod in_memory_catalog_repository;
pub mod jsonl_interaction_repository;
pub mod paths;
pub mod toml_catalog_repository;

pub use crate::catalog::CatalogDocument;
pub use crate::config_service::{AppConfig, ChatConfig};
pub use crate::in_memory_catalog_repository::InMemoryCatalogRepository;
pub use crate::jsonl_interaction_repository::JsonlInteractionRepository;
pub use crate::paths::IslaPaths;
pub use crate::toml_catalog_repository::TomlCatalogRepository;
