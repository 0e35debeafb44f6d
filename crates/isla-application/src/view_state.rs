//! View-state coordination.
//!
//! `ViewStateCoordinator` owns which island is selected, the species list of
//! that island and the loaded catalog. Every mutation goes through its own
//! entry points; readers get owned copies.

use isla_core::error::{IslaError, Result};
use isla_core::island::{Island, IslandField, IslandRepository};
use isla_core::scope::CurrentScope;
use isla_core::species::{ExtinctSpecies, SpeciesRepository};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// User-facing message for a failed catalog load.
pub const CATALOG_LOAD_FAILED: &str = "Failed to load islands. Please refresh the page.";

/// Order of the overview sections in the island detail view.
const OVERVIEW_ORDER: [IslandField; 5] = [
    IslandField::Climate,
    IslandField::Terrain,
    IslandField::Biodiversity,
    IslandField::History,
    IslandField::CulturalSignificance,
];

/// State of the top-level catalog load.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Load in progress (also the initial state).
    Loading,
    /// The full, ordered catalog.
    Ready(Vec<Island>),
    /// Load failed; nothing of the catalog is shown until a reload succeeds.
    Failed(String),
}

impl CatalogState {
    pub fn islands(&self) -> &[Island] {
        match self {
            Self::Ready(islands) => islands,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// Everything the island detail view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandDetail {
    pub island: Island,
    pub species: Vec<ExtinctSpecies>,
    pub species_loading: bool,
}

impl IslandDetail {
    /// Count shown on the species tab.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// The species featured by the animated creature badge.
    pub fn featured_species(&self) -> Option<&ExtinctSpecies> {
        self.species.first()
    }

    /// Present narrative fields, in display order.
    pub fn overview_sections(&self) -> Vec<(IslandField, &str)> {
        OVERVIEW_ORDER
            .iter()
            .filter_map(|field| self.island.field(*field).map(|text| (*field, text)))
            .collect()
    }
}

/// Result of a successful [`ViewStateCoordinator::select`].
#[derive(Debug)]
pub struct Selection {
    pub island: Island,
    /// Completes once the species fetch has been applied or discarded.
    pub species_load: JoinHandle<()>,
}

#[derive(Debug)]
struct ViewState {
    catalog: CatalogState,
    selected: Option<Island>,
    species: Vec<ExtinctSpecies>,
    species_loading: bool,
    /// Bumped on every scope change; a species fetch only lands if the
    /// generation it started under is still current.
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            catalog: CatalogState::Loading,
            selected: None,
            species: Vec::new(),
            species_loading: false,
            generation: 0,
        }
    }
}

/// Tracks the selected island and keeps its species list in sync.
pub struct ViewStateCoordinator {
    island_repository: Arc<dyn IslandRepository>,
    species_repository: Arc<dyn SpeciesRepository>,
    state: Arc<RwLock<ViewState>>,
}

impl ViewStateCoordinator {
    pub fn new(
        island_repository: Arc<dyn IslandRepository>,
        species_repository: Arc<dyn SpeciesRepository>,
    ) -> Self {
        Self {
            island_repository,
            species_repository,
            state: Arc::new(RwLock::new(ViewState::default())),
        }
    }

    /// Loads the catalog, replacing any previous catalog state.
    ///
    /// On failure the state becomes [`CatalogState::Failed`] and the error is
    /// returned; no partial catalog is kept.
    pub async fn load_catalog(&self) -> Result<Vec<Island>> {
        self.state.write().await.catalog = CatalogState::Loading;

        match self.island_repository.list_ordered().await {
            Ok(islands) => {
                tracing::info!(target: "catalog", count = islands.len(), "Catalog loaded");
                self.state.write().await.catalog = CatalogState::Ready(islands.clone());
                Ok(islands)
            }
            Err(e) => {
                tracing::error!(target: "catalog", "Failed to load islands: {}", e);
                self.state.write().await.catalog =
                    CatalogState::Failed(CATALOG_LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// User-initiated retry of the catalog load.
    pub async fn reload(&self) -> Result<Vec<Island>> {
        self.load_catalog().await
    }

    pub async fn catalog_state(&self) -> CatalogState {
        self.state.read().await.catalog.clone()
    }

    /// Selects an island from the loaded catalog and starts loading its
    /// species in the background.
    ///
    /// The previous species list is cleared immediately. A species fetch that
    /// completes after a newer `select` or `clear` is discarded. A failed
    /// fetch leaves the list empty; the selection itself still stands.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the island is not part of the loaded catalog.
    pub async fn select(&self, island_id: &str) -> Result<Selection> {
        let (island, generation) = {
            let mut state = self.state.write().await;
            let island = state
                .catalog
                .islands()
                .iter()
                .find(|island| island.id == island_id)
                .cloned()
                .ok_or_else(|| IslaError::not_found("island", island_id))?;

            state.generation += 1;
            state.selected = Some(island.clone());
            state.species.clear();
            state.species_loading = true;
            (island, state.generation)
        };

        tracing::debug!(target: "view_state", island_id, generation, "Island selected");

        let species_repository = Arc::clone(&self.species_repository);
        let state = Arc::clone(&self.state);
        let island_id = island.id.clone();
        let species_load = tokio::spawn(async move {
            let fetched = species_repository.list_by_island(&island_id).await;

            let mut state = state.write().await;
            if state.generation != generation {
                tracing::debug!(
                    target: "view_state",
                    island_id = %island_id,
                    generation,
                    "Discarding superseded species load"
                );
                return;
            }

            state.species = match fetched {
                Ok(species) => species,
                Err(e) => {
                    tracing::warn!(
                        target: "view_state",
                        island_id = %island_id,
                        "Failed to load species: {}",
                        e
                    );
                    Vec::new()
                }
            };
            state.species_loading = false;
        });

        Ok(Selection {
            island,
            species_load,
        })
    }

    /// Returns to the global scope and discards the species list.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.selected = None;
        state.species.clear();
        state.species_loading = false;
        tracing::debug!(target: "view_state", generation = state.generation, "Selection cleared");
    }

    pub async fn current_scope(&self) -> CurrentScope {
        let state = self.state.read().await;
        CurrentScope::from(state.selected.as_ref().map(|island| island.id.clone()))
    }

    /// Detail view model for the selected island, if any.
    pub async fn detail(&self) -> Option<IslandDetail> {
        let state = self.state.read().await;
        state.selected.as_ref().map(|island| IslandDetail {
            island: island.clone(),
            species: state.species.clone(),
            species_loading: state.species_loading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use isla_core::species::{AnimationHint, SpeciesCategory};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    fn island(id: &str, order: i32) -> Island {
        Island {
            id: id.to_string(),
            name: id.to_uppercase(),
            latitude: 0.0,
            longitude: 0.0,
            climate: Some(format!("{id} climate")),
            terrain: None,
            history: Some(format!("{id} history")),
            biodiversity: None,
            cultural_significance: Some(format!("{id} culture")),
            background_video_url: None,
            images: Vec::new(),
            order_index: order,
        }
    }

    fn species(id: &str, island_id: &str) -> ExtinctSpecies {
        ExtinctSpecies {
            id: id.to_string(),
            island_id: Some(island_id.to_string()),
            name: id.to_string(),
            scientific_name: None,
            category: SpeciesCategory::Mammal,
            description: None,
            extinction_year: None,
            extinction_cause: None,
            narration_text: None,
            narration_audio_url: None,
            animation: AnimationHint::default(),
            images: Vec::new(),
            wikipedia_url: None,
        }
    }

    // Mock IslandRepository that can be switched to fail
    struct MockIslandRepository {
        islands: Vec<Island>,
        fail: AtomicBool,
    }

    impl MockIslandRepository {
        fn new(islands: Vec<Island>) -> Self {
            Self {
                islands,
                fail: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl IslandRepository for MockIslandRepository {
        async fn list_ordered(&self) -> Result<Vec<Island>> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(IslaError::data_access("store offline"));
            }
            Ok(self.islands.clone())
        }

        async fn find_by_id(&self, island_id: &str) -> Result<Option<Island>> {
            Ok(self.islands.iter().find(|i| i.id == island_id).cloned())
        }
    }

    // Mock SpeciesRepository whose responses are released per island
    struct GatedSpeciesRepository {
        species: HashMap<String, Vec<ExtinctSpecies>>,
        gates: Mutex<HashMap<String, Arc<Notify>>>,
        failing: Vec<String>,
    }

    impl GatedSpeciesRepository {
        fn new(species: HashMap<String, Vec<ExtinctSpecies>>) -> Self {
            Self {
                species,
                gates: Mutex::new(HashMap::new()),
                failing: Vec::new(),
            }
        }

        fn gate(&self, island_id: &str) -> Arc<Notify> {
            let mut gates = self.gates.lock().unwrap();
            gates
                .entry(island_id.to_string())
                .or_insert_with(|| Arc::new(Notify::new()))
                .clone()
        }

        fn release(&self, island_id: &str) {
            self.gate(island_id).notify_one();
        }
    }

    #[async_trait]
    impl SpeciesRepository for GatedSpeciesRepository {
        async fn list_by_island(&self, island_id: &str) -> Result<Vec<ExtinctSpecies>> {
            self.gate(island_id).notified().await;
            if self.failing.iter().any(|id| id == island_id) {
                return Err(IslaError::data_access("species table unavailable"));
            }
            Ok(self.species.get(island_id).cloned().unwrap_or_default())
        }

        async fn list_all(&self) -> Result<Vec<ExtinctSpecies>> {
            Ok(self.species.values().flatten().cloned().collect())
        }
    }

    async fn shown_species(coordinator: &ViewStateCoordinator) -> Vec<ExtinctSpecies> {
        coordinator
            .detail()
            .await
            .map(|detail| detail.species)
            .unwrap_or_default()
    }

    async fn species_loading(coordinator: &ViewStateCoordinator) -> bool {
        coordinator
            .detail()
            .await
            .is_some_and(|detail| detail.species_loading)
    }

    fn fixture() -> (ViewStateCoordinator, Arc<GatedSpeciesRepository>) {
        let islands = Arc::new(MockIslandRepository::new(vec![island("a", 1), island("b", 2)]));
        let species = Arc::new(GatedSpeciesRepository::new(HashMap::from([
            ("a".to_string(), vec![species("a-1", "a"), species("a-2", "a")]),
            ("b".to_string(), vec![species("b-1", "b")]),
        ])));
        (ViewStateCoordinator::new(islands, species.clone()), species)
    }

    #[tokio::test]
    async fn test_initial_state_is_loading_and_global() {
        let (coordinator, _) = fixture();
        assert_eq!(coordinator.catalog_state().await, CatalogState::Loading);
        assert_eq!(coordinator.current_scope().await, CurrentScope::Global);
        assert!(coordinator.detail().await.is_none());
    }

    #[tokio::test]
    async fn test_select_loads_species() {
        let (coordinator, species_repo) = fixture();
        coordinator.load_catalog().await.unwrap();

        let selection = coordinator.select("a").await.unwrap();
        assert_eq!(selection.island.id, "a");
        assert_eq!(coordinator.current_scope().await, CurrentScope::Island("a".to_string()));
        assert!(species_loading(&coordinator).await);
        assert!(shown_species(&coordinator).await.is_empty());

        species_repo.release("a");
        selection.species_load.await.unwrap();

        assert!(!species_loading(&coordinator).await);
        assert_eq!(shown_species(&coordinator).await.len(), 2);
    }

    #[tokio::test]
    async fn test_late_response_for_previous_selection_is_discarded() {
        let (coordinator, species_repo) = fixture();
        coordinator.load_catalog().await.unwrap();

        let first = coordinator.select("a").await.unwrap();
        let second = coordinator.select("b").await.unwrap();

        species_repo.release("b");
        second.species_load.await.unwrap();
        species_repo.release("a");
        first.species_load.await.unwrap();

        let species = shown_species(&coordinator).await;
        assert_eq!(species.len(), 1);
        assert!(species.iter().all(|s| s.belongs_to("b")));
        assert_eq!(coordinator.current_scope().await, CurrentScope::Island("b".to_string()));
    }

    #[tokio::test]
    async fn test_pending_species_cleared_on_reselect() {
        let (coordinator, species_repo) = fixture();
        coordinator.load_catalog().await.unwrap();

        species_repo.release("a");
        coordinator.select("a").await.unwrap().species_load.await.unwrap();
        assert_eq!(shown_species(&coordinator).await.len(), 2);

        let pending = coordinator.select("b").await.unwrap();
        assert!(shown_species(&coordinator).await.is_empty());
        species_repo.release("b");
        pending.species_load.await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_discards_in_flight_species() {
        let (coordinator, species_repo) = fixture();
        coordinator.load_catalog().await.unwrap();

        let selection = coordinator.select("a").await.unwrap();
        coordinator.clear().await;
        species_repo.release("a");
        selection.species_load.await.unwrap();

        assert_eq!(coordinator.current_scope().await, CurrentScope::Global);
        assert!(shown_species(&coordinator).await.is_empty());
        assert!(!species_loading(&coordinator).await);
    }

    #[tokio::test]
    async fn test_species_failure_keeps_selection() {
        let islands = Arc::new(MockIslandRepository::new(vec![island("a", 1)]));
        let mut gated = GatedSpeciesRepository::new(HashMap::new());
        gated.failing.push("a".to_string());
        let species_repo = Arc::new(gated);
        let coordinator = ViewStateCoordinator::new(islands, species_repo.clone());
        coordinator.load_catalog().await.unwrap();

        let selection = coordinator.select("a").await.unwrap();
        species_repo.release("a");
        selection.species_load.await.unwrap();

        let detail = coordinator.detail().await.unwrap();
        assert_eq!(detail.island.id, "a");
        assert_eq!(detail.species_count(), 0);
        assert!(!detail.species_loading);
    }

    #[tokio::test]
    async fn test_select_unknown_island_is_not_found() {
        let (coordinator, _) = fixture();
        coordinator.load_catalog().await.unwrap();

        let err = coordinator.select("zzz").await.err().unwrap();
        assert!(err.is_not_found());
        assert_eq!(coordinator.current_scope().await, CurrentScope::Global);
    }

    #[tokio::test]
    async fn test_catalog_failure_then_reload() {
        let islands = Arc::new(MockIslandRepository::new(vec![island("a", 1)]));
        islands.fail.store(true, Ordering::SeqCst);
        let coordinator = ViewStateCoordinator::new(
            islands.clone(),
            Arc::new(GatedSpeciesRepository::new(HashMap::new())),
        );

        assert!(coordinator.load_catalog().await.is_err());
        assert_eq!(
            coordinator.catalog_state().await,
            CatalogState::Failed(CATALOG_LOAD_FAILED.to_string())
        );
        assert!(coordinator.catalog_state().await.islands().is_empty());

        islands.fail.store(false, Ordering::SeqCst);
        let loaded = coordinator.reload().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(matches!(coordinator.catalog_state().await, CatalogState::Ready(_)));
    }

    #[tokio::test]
    async fn test_detail_overview_sections_order() {
        let (coordinator, species_repo) = fixture();
        coordinator.load_catalog().await.unwrap();
        species_repo.release("a");
        coordinator.select("a").await.unwrap().species_load.await.unwrap();

        let detail = coordinator.detail().await.unwrap();
        let fields: Vec<_> = detail
            .overview_sections()
            .into_iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(
            fields,
            vec![
                IslandField::Climate,
                IslandField::History,
                IslandField::CulturalSignificance
            ]
        );
        assert_eq!(detail.featured_species().unwrap().id, "a-1");
    }
}
