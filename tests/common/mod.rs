#![allow(dead_code)]

use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

use domain_rotator::application::services::{GroupService, HealthService, ResolverService};
use domain_rotator::infrastructure::persistence::{
    SqliteCheckRepository, SqliteGroupRepository, SqliteLandingRepository, SqliteTransitRepository,
};
use domain_rotator::infrastructure::probe::HttpProber;
use domain_rotator::scheduler::SchedulerHandle;
use domain_rotator::state::AppState;

/// Serves an axum router on an ephemeral local port and returns its address.
/// The server task dies with the test runtime.
pub async fn spawn_http_server(router: axum::Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    addr
}

pub async fn create_test_group(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO groups (name, created_at) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_transit(
    pool: &SqlitePool,
    group_id: i64,
    url: &str,
    path: &str,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO transit_domains (url, path, status, group_id, created_at)
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(url)
    .bind(path)
    .bind(status)
    .bind(group_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_landing(
    pool: &SqlitePool,
    group_id: i64,
    url: &str,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO landing_domains (url, status, group_id, created_at)
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(url)
    .bind(status)
    .bind(group_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn landing_status(pool: &SqlitePool, id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM landing_domains WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn transit_status(pool: &SqlitePool, id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM transit_domains WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Builds the full application state over a test pool. The scheduler is
/// started with a one-hour interval; its first tick is skipped, so no timer
/// run ever fires inside a test.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let group_repo = Arc::new(SqliteGroupRepository::new(pool.clone()));
    let transit_repo = Arc::new(SqliteTransitRepository::new(pool.clone()));
    let landing_repo = Arc::new(SqliteLandingRepository::new(pool.clone()));
    let check_repo = Arc::new(SqliteCheckRepository::new(pool.clone()));

    let prober = Arc::new(HttpProber::new(Duration::from_secs(2)).unwrap());

    let health_service = Arc::new(HealthService::new(check_repo, prober, false, 4));
    let resolver_service = Arc::new(ResolverService::new(
        transit_repo.clone(),
        landing_repo.clone(),
        group_repo.clone(),
    ));
    let group_service = Arc::new(GroupService::new(group_repo, transit_repo, landing_repo));

    let scheduler = SchedulerHandle::start(health_service, Duration::from_secs(3600));

    AppState {
        group_service,
        resolver_service,
        scheduler,
    }
}
