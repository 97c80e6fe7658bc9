//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, worker spawning, and the Axum
//! server lifecycle.

use crate::application::services::RegistryService;
use crate::config::Config;
use crate::domain::hit_worker::run_hit_worker;
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::persistence::PgShortLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (shared by every request for the process
///   lifetime)
/// - Schema migrations
/// - Background hit worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server bind
/// fail. A failed store connection at startup is fatal: the error propagates
/// out of `main` and the process exits.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository: Arc<dyn ShortLinkRepository> =
        Arc::new(PgShortLinkRepository::new(Arc::new(pool)));

    let (hit_tx, hit_rx) = mpsc::channel(config.hit_queue_capacity);
    tokio::spawn(run_hit_worker(hit_rx, repository.clone()));
    tracing::info!("Hit worker started");

    let registry = Arc::new(RegistryService::new(repository));
    let state = AppState { registry, hit_tx };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
