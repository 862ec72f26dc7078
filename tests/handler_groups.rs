mod common;

use axum_test::TestServer;
use domain_rotator::routes;
use serde_json::json;
use sqlx::SqlitePool;

fn server(state: domain_rotator::AppState) -> TestServer {
    TestServer::new(routes::router(state)).unwrap()
}

#[sqlx::test]
async fn test_create_group(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server.post("/api/groups").json(&json!({ "name": "A" })).await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "A");
    assert_eq!(body["transit_domains_count"], 0);
    assert_eq!(body["landing_domains_count"], 0);
}

#[sqlx::test]
async fn test_create_group_duplicate_name(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    server.post("/api/groups").json(&json!({ "name": "A" })).await;
    let response = server.post("/api/groups").json(&json!({ "name": "A" })).await;

    assert_eq!(response.status_code(), 409);
}

#[sqlx::test]
async fn test_create_group_empty_name(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server.post("/api/groups").json(&json!({ "name": "  " })).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_list_groups_with_counts(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "pending").await;
    common::create_test_landing(&pool, group_id, "l1.example", "pending").await;
    common::create_test_landing(&pool, group_id, "l2.example", "pending").await;
    common::create_test_group(&pool, "B").await;

    let server = server(common::create_test_state(pool));

    let response = server.get("/api/groups").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    let a = items.iter().find(|i| i["name"] == "A").unwrap();
    assert_eq!(a["transit_domains_count"], 1);
    assert_eq!(a["landing_domains_count"], 2);
}

#[sqlx::test]
async fn test_group_detail(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "pending").await;

    let server = server(common::create_test_state(pool));

    let response = server.get(&format!("/api/groups/{group_id}")).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["group"]["name"], "A");
    assert_eq!(body["transit_domains"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["transit_domains"][0]["full_url"],
        "http://t.example/go"
    );
    assert_eq!(body["landing_domains"].as_array().unwrap().len(), 1);
    assert_eq!(body["landing_domains"][0]["status"], "pending");
}

#[sqlx::test]
async fn test_group_detail_not_found(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server.get("/api/groups/999").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_group_cascades(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;
    common::create_test_landing(&pool, group_id, "l1.example", "safe").await;

    let server = server(common::create_test_state(pool.clone()));

    let response = server.delete(&format!("/api/groups/{group_id}")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Group \"A\" deleted successfully.");

    // Both domain sets are gone with the group.
    let transit_left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transit_domains")
        .fetch_one(&pool)
        .await
        .unwrap();
    let landing_left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM landing_domains")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(transit_left, 0);
    assert_eq!(landing_left, 0);

    // Former transit links now resolve to nothing.
    let redirect = server
        .get("/go")
        .add_header("Host", "t.example")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;
    redirect.assert_status_not_found();
}

#[sqlx::test]
async fn test_add_landing_domains_text_blob(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post(&format!("/api/groups/{group_id}/landing_domains"))
        .json(&json!({ "urls": "a.example\nb.example, c.example" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Successfully added 3 landing domains.");

    // Re-adding the same urls adds nothing.
    let response = server
        .post(&format!("/api/groups/{group_id}/landing_domains"))
        .json(&json!({ "urls": ["a.example", "b.example"] }))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Successfully added 0 landing domains.");
}

#[sqlx::test]
async fn test_add_landing_domains_missing_urls(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let server = server(common::create_test_state(pool));

    let response = server
        .post(&format!("/api/groups/{group_id}/landing_domains"))
        .json(&json!({ "urls": "" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_add_transit_domains_default_path(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post(&format!("/api/groups/{group_id}/transit_domains"))
        .json(&json!({ "urls": ["t1.example", "t2.example"] }))
        .await;

    assert_eq!(response.status_code(), 201);

    let paths: Vec<String> =
        sqlx::query_scalar("SELECT path FROM transit_domains ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(paths, vec!["/go", "/go"]);
}

#[sqlx::test]
async fn test_add_transit_domains_custom_path_normalized(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let server = server(common::create_test_state(pool.clone()));

    server
        .post(&format!("/api/groups/{group_id}/transit_domains"))
        .json(&json!({
            "urls": "t1.example",
            "path_type": "custom",
            "custom_path": "promo"
        }))
        .await;

    let path: String = sqlx::query_scalar("SELECT path FROM transit_domains")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(path, "/promo");
}

#[sqlx::test]
async fn test_add_transit_domains_random_paths(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let server = server(common::create_test_state(pool.clone()));

    server
        .post(&format!("/api/groups/{group_id}/transit_domains"))
        .json(&json!({ "urls": ["t1.example", "t2.example"], "path_type": "random" }))
        .await;

    let paths: Vec<String> = sqlx::query_scalar("SELECT path FROM transit_domains")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(paths.len(), 2);
    for path in paths {
        assert!(path.starts_with('/'));
        assert!((5..=8).contains(&(path.len() - 1)), "path was {path}");
        assert!(path[1..].chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[sqlx::test]
async fn test_add_transit_domains_reports_skipped(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    common::create_test_transit(&pool, group_id, "t1.example", "/go", "pending").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .post(&format!("/api/groups/{group_id}/transit_domains"))
        .json(&json!({ "urls": ["t1.example", "t2.example"] }))
        .await;

    let body: serde_json::Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Added 1 new transit domains."), "{message}");
    assert!(message.contains("1 skipped"), "{message}");
}

#[sqlx::test]
async fn test_same_host_multiple_paths(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let server = server(common::create_test_state(pool.clone()));

    // Same host twice with different path policies: both are kept.
    server
        .post(&format!("/api/groups/{group_id}/transit_domains"))
        .json(&json!({ "urls": "t1.example" }))
        .await;
    server
        .post(&format!("/api/groups/{group_id}/transit_domains"))
        .json(&json!({
            "urls": "t1.example",
            "path_type": "custom",
            "custom_path": "/alt"
        }))
        .await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transit_domains WHERE url = ?")
        .bind("t1.example")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test]
async fn test_delete_transit_domain(pool: SqlitePool) {
    let group_id = common::create_test_group(&pool, "A").await;
    let transit_id = common::create_test_transit(&pool, group_id, "t.example", "/go", "safe").await;

    let server = server(common::create_test_state(pool));

    let response = server
        .delete(&format!("/api/transit_domains/{transit_id}"))
        .await;
    response.assert_status_ok();

    let response = server
        .delete(&format!("/api/transit_domains/{transit_id}"))
        .await;
    response.assert_status_not_found();
}
