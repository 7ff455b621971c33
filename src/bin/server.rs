use anyhow::Context;
use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::settings::Settings;
use trivia_api::telemetry::{init_tracing, Metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let settings = Settings::from_env().context("Failed to read configuration")?;
    let pool = db::establish_connection(&settings.db_path)
        .await
        .with_context(|| format!("Cannot connect to DB at {}", settings.db_path))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    let metrics = Metrics::new().context("Failed to register metrics")?;
    run_server(pool, metrics, &settings.bind_addr).await
}
