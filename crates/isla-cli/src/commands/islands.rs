use super::render;
use anyhow::{Result, anyhow};
use isla_application::Explorer;
use isla_application::view_state::CATALOG_LOAD_FAILED;

pub async fn run(explorer: &Explorer) -> Result<()> {
    let islands = explorer
        .start()
        .await
        .map_err(|e| anyhow!("{CATALOG_LOAD_FAILED} ({e})"))?;

    for island in &islands {
        println!("{}", render::island_line(island));
    }
    Ok(())
}
