use anyhow::Context;
use portfolio_db_client::PORTFOLIO_DB_MIGRATIONS;
use portfolio_service::api::{self, context::ApiContext};
use portfolio_service::config::{Config, Environment};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized db connection"
    );

    PORTFOLIO_DB_MIGRATIONS
        .run(&db)
        .await
        .context("could not run migrations")?;

    tracing::info!("migrations are up to date");

    api::setup_and_serve(ApiContext {
        db,
        config: Arc::new(config),
    })
    .await?;

    Ok(())
}
