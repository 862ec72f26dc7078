mod common;

use axum_test::TestServer;
use domain_rotator::routes;
use sqlx::SqlitePool;
use std::collections::HashSet;

fn server(state: domain_rotator::AppState) -> TestServer {
    TestServer::new(routes::router(state)).unwrap()
}

#[sqlx::test]
async fn test_redirect_to_only_safe_landing(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;
    common::create_test_landing(&pool, group_id, "l2.example", "unsafe").await;

    let server = server(common::create_test_state(pool));

    // Only l1 is safe, so every request must land on it.
    for _ in 0..10 {
        let response = server
            .get("/go")
            .add_header("Host", "t.example")
            .add_header("User-Agent", "Mozilla/5.0")
            .await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("l1.example"), "body was: {body}");
        assert!(!body.contains("l2.example"));
    }
}

#[sqlx::test]
async fn test_bot_user_agent_is_rejected(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .get("/go")
        .add_header("Host", "t.example")
        .add_header("User-Agent", "curl/7.64")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found (Bot)");
}

#[sqlx::test]
async fn test_reserved_prefix_is_rejected(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/assets/app.js")
        .add_header("Host", "t.example")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found (Admin Endpoint)");

    let response = server
        .get("/group/5")
        .add_header("Host", "t.example")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found (Admin Endpoint)");
}

#[sqlx::test]
async fn test_unhealthy_transit_is_invisible(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "unsafe").await;
    common::create_test_transit(&pool, group_id, "t.example", "/pending", "pending").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;

    let server = server(common::create_test_state(pool));

    for path in ["/go", "/pending", "/missing"] {
        let response = server
            .get(path)
            .add_header("Host", "t.example")
            .add_header("User-Agent", "Mozilla/5.0")
            .await;

        response.assert_status_not_found();
        assert_eq!(response.text(), "Invalid or unhealthy transit link.");
    }
}

#[sqlx::test]
async fn test_no_healthy_landing(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "unsafe").await;
    common::create_test_landing(&pool, group_id, "l2.example", "pending").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .get("/go")
        .add_header("Host", "t.example")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "No healthy landing page available.");
}

#[sqlx::test]
async fn test_host_port_is_stripped(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .get("/go")
        .add_header("Host", "t.example:8443")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("l1.example"));
}

#[sqlx::test]
async fn test_selection_covers_every_safe_landing(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;
    common::create_test_landing(&pool, group_id, "l2.example", "safe").await;

    let server = server(common::create_test_state(pool));

    let mut seen = HashSet::new();
    for _ in 0..100 {
        let response = server
            .get("/go")
            .add_header("Host", "t.example")
            .add_header("User-Agent", "Mozilla/5.0")
            .await;

        response.assert_status_ok();
        let body = response.text();
        if body.contains("l1.example") {
            seen.insert("l1");
        }
        if body.contains("l2.example") {
            seen.insert("l2");
        }
    }

    assert_eq!(seen.len(), 2, "both safe landings should be selected");
}

#[sqlx::test]
async fn test_redirect_body_carries_literal_target(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .get("/go")
        .add_header("Host", "t.example")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;

    response.assert_status_ok();
    let body = response.text();
    // Both the meta refresh and the script navigation carry the URL.
    assert!(body.contains("url=l1.example"));
    assert!(body.contains("window.location.href = \"l1.example\""));
}

#[sqlx::test]
async fn test_test_redirect_endpoint(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    // Transit still pending - the dry run matches it anyway.
    common::create_test_transit(&pool, group_id, "t.example", "/go", "pending").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .post("/api/test_redirect")
        .json(&serde_json::json!({ "url": "t.example", "path": "/go" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["landing_url"], "l1.example");
    assert_eq!(body["group_name"], "A");
}

#[sqlx::test]
async fn test_test_redirect_unknown_transit(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/api/test_redirect")
        .json(&serde_json::json!({ "url": "nope.example", "path": "/go" }))
        .await;

    response.assert_status_not_found();
}
