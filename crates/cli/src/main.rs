//! # `mealie-bulk` CLI
//!
//! Command-line front end for the bulk importer: reads a JSON file containing
//! an array of recipes and imports them into a Mealie instance.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mealie_bulk::{BulkImporter, ImportOptions, MealieClient, MealieConfig, Recipe};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import recipes from a JSON file into Mealie
    Import(ImportArgs),
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Path to a JSON file holding an array of recipes
    #[arg(long)]
    file: PathBuf,
    /// Base URL of the Mealie instance
    #[arg(long, env = "MEALIE_BASE_URL")]
    base_url: String,
    /// Mealie API token
    #[arg(long, env = "MEALIE_API_TOKEN", hide_env_values = true)]
    token: String,
    /// Also attach reconciled tags to created recipes
    #[arg(long)]
    attach_tags: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Import(args) => run_import(args).await,
    }
}

async fn run_import(args: ImportArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of recipes", args.file.display()))?;
    if recipes.is_empty() {
        bail!("no recipes found in {}", args.file.display());
    }

    let client = MealieClient::new(MealieConfig {
        base_url: args.base_url,
        api_token: args.token,
    })?;
    let importer = BulkImporter::with_options(
        client,
        ImportOptions {
            attach_tags: args.attach_tags,
        },
    );

    // Ctrl-C stops picking up new recipes; already-created ones are kept.
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    info!("importing {} recipes", recipes.len());
    let result = importer.import_with_cancellation(&recipes, &cancel).await;

    info!(
        "import finished: {} succeeded, {} failed",
        result.success_count, result.failure_count
    );
    for message in &result.error_messages {
        warn!("{message}");
    }
    if result.success_count == 0 {
        bail!("no recipes were imported");
    }
    Ok(())
}
