mod config;
mod contract;
mod db;
mod errors;
mod models;
mod routes;
mod seed;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::seed::{seed_database, SeedOutcome};
use crate::state::AppState;
use crate::storage::{MemoryStorage, PgStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    // Seed once, before the listener accepts any request.
    match seed_database(store.as_ref()).await? {
        SeedOutcome::Seeded(counts) => info!(
            profiles = counts.profiles,
            skills = counts.skills,
            experience = counts.experience,
            projects = counts.projects,
            education = counts.education,
            "Seed data inserted"
        ),
        SeedOutcome::AlreadySeeded => info!("Using existing seed data"),
    }

    let state = AppState { store };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connects to Postgres and applies the schema, or falls back to the
/// in-memory store when no `DATABASE_URL` is configured.
async fn build_store(config: &Config) -> Result<Arc<dyn Storage>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.db_max_connections).await?;
            run_migrations(&pool).await?;
            Ok(Arc::new(PgStorage::new(pool)))
        }
        None => {
            warn!("DATABASE_URL is not set; using in-memory storage, data is lost on exit");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}
