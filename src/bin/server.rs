use anyhow::Context;
use trivia_api::db;
use trivia_api::quiz::QuizRng;
use trivia_api::server::app::{run_server, AppState};
use trivia_api::settings::Settings;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::load().context("Invalid configuration")?;
    let pool = db::establish_connection(&settings.db_path)
        .await
        .with_context(|| format!("Cannot open database {}", settings.db_path))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    let quiz_rng = match settings.quiz_seed {
        Some(seed) => QuizRng::seeded(seed),
        None => QuizRng::from_entropy(),
    };
    run_server(AppState::new(pool, quiz_rng), &settings.addr()).await
}
