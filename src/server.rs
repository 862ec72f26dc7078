//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, service wiring, scheduler
//! startup and the Axum server lifecycle.

use crate::application::services::{GroupService, HealthService, ResolverService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteCheckRepository, SqliteGroupRepository, SqliteLandingRepository,
    SqliteTransitRepository,
};
use crate::infrastructure::probe::HttpProber;
use crate::routes::app_router;
use crate::scheduler::SchedulerHandle;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if needed)
/// - Migrations
/// - Repositories, services and the outbound prober
/// - The background check scheduler
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The HTTP client cannot be built
/// - Server bind fails or a runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let group_repo = Arc::new(SqliteGroupRepository::new(pool.clone()));
    let transit_repo = Arc::new(SqliteTransitRepository::new(pool.clone()));
    let landing_repo = Arc::new(SqliteLandingRepository::new(pool.clone()));
    let check_repo = Arc::new(SqliteCheckRepository::new(pool.clone()));

    let prober = Arc::new(
        HttpProber::new(Duration::from_secs(config.probe_timeout_secs))
            .context("Failed to build probe client")?,
    );

    let health_service = Arc::new(HealthService::new(
        check_repo,
        prober,
        config.recheck_unsafe,
        config.probe_concurrency,
    ));
    let resolver_service = Arc::new(ResolverService::new(
        transit_repo.clone(),
        landing_repo.clone(),
        group_repo.clone(),
    ));
    let group_service = Arc::new(GroupService::new(group_repo, transit_repo, landing_repo));

    let scheduler = SchedulerHandle::start(
        health_service,
        Duration::from_secs(config.check_interval_secs),
    );

    let state = AppState {
        group_service,
        resolver_service,
        scheduler: scheduler.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
