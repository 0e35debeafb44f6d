//! Builds the explorer from configuration.

use anyhow::{Context, Result};
use isla_application::{
    ChatPanel, ChatService, ChatTransport, Explorer, HttpChatTransport, InteractionLogger,
    LocalChatTransport, ViewStateCoordinator,
};
use isla_core::assistant::Guide;
use isla_core::island::IslandRepository;
use isla_core::species::SpeciesRepository;
use isla_infrastructure::{
    AppConfig, InMemoryCatalogRepository, JsonlInteractionRepository, TomlCatalogRepository,
};
use std::path::Path;
use std::sync::Arc;

type Stores = (Arc<dyn IslandRepository>, Arc<dyn SpeciesRepository>);

pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?.with_overrides(|key| std::env::var(key).ok()),
        None => AppConfig::load()?,
    };
    Ok(config)
}

fn catalog_stores(config: &AppConfig) -> Result<Stores> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!(target: "catalog", "Using catalog file {}", path.display());
            let store = Arc::new(TomlCatalogRepository::with_path(path));
            let islands: Arc<dyn IslandRepository> = store.clone();
            let species: Arc<dyn SpeciesRepository> = store;
            Ok((islands, species))
        }
        None => {
            let store = Arc::new(
                InMemoryCatalogRepository::seeded().context("Bundled catalog is invalid")?,
            );
            let islands: Arc<dyn IslandRepository> = store.clone();
            let species: Arc<dyn SpeciesRepository> = store;
            Ok((islands, species))
        }
    }
}

fn chat_transport(config: &AppConfig, stores: &Stores) -> Result<Arc<dyn ChatTransport>> {
    if let Some(endpoint) = &config.chat.endpoint {
        tracing::info!(target: "chat", endpoint = %endpoint, "Using remote chat handler");
        let mut transport = HttpChatTransport::new(endpoint.clone(), config.chat.timeout());
        if let Some(api_key) = &config.chat.api_key {
            transport = transport.with_api_key(api_key.clone());
        }
        return Ok(Arc::new(transport));
    }

    let log_path = config.interaction_log_path()?;
    tracing::debug!(target: "interaction_log", "Recording interactions to {}", log_path.display());
    let service = ChatService::new(
        stores.0.clone(),
        stores.1.clone(),
        Guide::default(),
        InteractionLogger::new(Arc::new(JsonlInteractionRepository::with_path(log_path))),
    );
    Ok(Arc::new(LocalChatTransport::new(Arc::new(service))))
}

pub fn build_explorer(config: &AppConfig) -> Result<Explorer> {
    let stores = catalog_stores(config)?;
    let transport = chat_transport(config, &stores)?;
    let coordinator = Arc::new(ViewStateCoordinator::new(stores.0.clone(), stores.1.clone()));
    Ok(Explorer::new(
        coordinator,
        ChatPanel::new(transport, config.chat.timeout()),
    ))
}
