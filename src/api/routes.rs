//! API route configuration.

use crate::api::handlers::{
    add_landing_domains_handler, add_transit_domains_handler, create_group_handler,
    delete_domains_handler, delete_group_handler, delete_transit_domain_handler,
    group_detail_handler, list_domains_handler, list_groups_handler, run_check_handler,
    scheduler_pause_handler, scheduler_resume_handler, scheduler_status_handler, stats_handler,
    test_redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All management API routes.
///
/// # Endpoints
///
/// - `GET    /stats`                         - Landing-domain status counts
/// - `GET    /domains`                       - Paginated landing overview
/// - `DELETE /domains`                       - Bulk delete landing domains
/// - `GET    /groups`                        - List groups with counts
/// - `POST   /groups`                        - Create a group
/// - `GET    /groups/{id}`                   - Group with both domain sets
/// - `DELETE /groups/{id}`                   - Delete a group (cascades)
/// - `POST   /groups/{id}/landing_domains`   - Bulk add landing domains
/// - `POST   /groups/{id}/transit_domains`   - Bulk add transit domains
/// - `DELETE /transit_domains/{id}`          - Delete one transit domain
/// - `POST   /tasks/run_check`               - Trigger a health-check run
/// - `POST   /scheduler/pause`               - Suspend scheduled runs
/// - `POST   /scheduler/resume`              - Re-enable scheduled runs
/// - `GET    /scheduler/status`              - Scheduler state
/// - `POST   /test_redirect`                 - Dry-run resolution
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_handler))
        .route(
            "/domains",
            get(list_domains_handler).delete(delete_domains_handler),
        )
        .route(
            "/groups",
            get(list_groups_handler).post(create_group_handler),
        )
        .route(
            "/groups/{id}",
            get(group_detail_handler).delete(delete_group_handler),
        )
        .route(
            "/groups/{id}/landing_domains",
            post(add_landing_domains_handler),
        )
        .route(
            "/groups/{id}/transit_domains",
            post(add_transit_domains_handler),
        )
        .route("/transit_domains/{id}", delete(delete_transit_domain_handler))
        .route("/tasks/run_check", post(run_check_handler))
        .route("/scheduler/pause", post(scheduler_pause_handler))
        .route("/scheduler/resume", post(scheduler_resume_handler))
        .route("/scheduler/status", get(scheduler_status_handler))
        .route("/test_redirect", post(test_redirect_handler))
}
