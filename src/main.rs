use anyhow::Context;
use tracing::info;

use inventory_api::{build_router, config::Config, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,inventory_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!(url = %config.database_url, "Opening database...");
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open database")?;

    info!("Running migrations...");
    db::migrate(&pool).await.context("failed to run migrations")?;
    info!("Migrations complete.");

    let app = build_router(AppState {
        db: pool,
        default_per_page: config.default_per_page,
    });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
