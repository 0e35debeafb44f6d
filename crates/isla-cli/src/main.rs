use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod wiring;

#[derive(Parser)]
#[command(name = "isla")]
#[command(about = "ISLA - explore islands and the species they lost", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/isla/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// TOML catalog to use instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log at debug level regardless of ISLA_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the islands in catalog order
    Islands,
    /// Show an island with its extinct species
    Show {
        /// Island identifier
        id: String,
    },
    /// Ask a single question and print the answer
    Ask {
        /// Scope the question to this island
        #[arg(long)]
        island: Option<String>,
        /// The question
        question: Vec<String>,
    },
    /// Interactive session (default)
    Repl,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("ISLA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = wiring::load_config(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    let explorer = wiring::build_explorer(&config)?;

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Islands => commands::islands::run(&explorer).await,
        Commands::Show { id } => commands::show::run(&explorer, &id).await,
        Commands::Ask { island, question } => {
            commands::ask::run(&explorer, island.as_deref(), &question.join(" ")).await
        }
        Commands::Repl => commands::repl::run(&explorer).await,
    };

    // Interaction records are written in the background
    explorer.shutdown().await;
    result
}
