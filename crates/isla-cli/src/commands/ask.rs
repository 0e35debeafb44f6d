use anyhow::{Result, anyhow, bail};
use colored::Colorize;
use isla_application::chat_panel::APOLOGY;
use isla_application::view_state::CATALOG_LOAD_FAILED;
use isla_application::{Explorer, SubmitOutcome};

pub async fn run(explorer: &Explorer, island_id: Option<&str>, question: &str) -> Result<()> {
    explorer
        .start()
        .await
        .map_err(|e| anyhow!("{CATALOG_LOAD_FAILED} ({e})"))?;

    if let Some(island_id) = island_id {
        explorer.select_island(island_id).await?;
    }

    match explorer.ask(question).await {
        SubmitOutcome::Answered(text) => println!("{}", text),
        SubmitOutcome::Failed => bail!(APOLOGY),
        SubmitOutcome::Empty => bail!("Nothing to ask"),
        SubmitOutcome::Busy | SubmitOutcome::Superseded => {
            println!("{}", "The question was not answered".yellow())
        }
    }
    Ok(())
}
