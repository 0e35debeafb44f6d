use super::render;
use anyhow::{Result, anyhow};
use isla_application::Explorer;
use isla_application::view_state::CATALOG_LOAD_FAILED;

pub async fn run(explorer: &Explorer, island_id: &str) -> Result<()> {
    explorer
        .start()
        .await
        .map_err(|e| anyhow!("{CATALOG_LOAD_FAILED} ({e})"))?;

    let selection = explorer.select_island(island_id).await?;
    selection.species_load.await?;

    if let Some(detail) = explorer.detail().await {
        render::print_detail(&detail);
    }
    Ok(())
}
