use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::db::{self, seed};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the bundled trivia set into an empty database
    Seed,
    /// Replace all data with categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Write all data as CSV into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli.db_path.display().to_string();
    let pool = db::establish_connection(&db_path)
        .await
        .with_context(|| format!("Cannot connect to {db_path}"))?;
    db::run_migrations(&pool).await?;

    match cli.command {
        Commands::Seed => {
            if !seed::load_bundled(&pool).await? {
                tracing::warn!("Database already holds data, nothing seeded");
            }
        }
        Commands::Import { path } => seed::import_dir(&pool, &path)
            .await
            .context("Cannot import")?,
        Commands::Export { path } => seed::export_dir(&pool, &path)
            .await
            .context("Cannot export")?,
    }
    Ok(())
}
