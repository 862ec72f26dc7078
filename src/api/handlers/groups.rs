//! Handlers for group management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::common::MessageResponse;
use crate::api::dto::group::{
    AddLandingDomainsRequest, AddTransitDomainsRequest, CreateGroupRequest, GroupDetailResponse,
    GroupInfo, GroupItem, GroupListResponse,
};
use crate::application::services::PathSpec;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all groups with their domain counts, newest first.
///
/// # Endpoint
///
/// `GET /api/groups`
pub async fn list_groups_handler(
    State(state): State<AppState>,
) -> Result<Json<GroupListResponse>, AppError> {
    let groups = state.group_service.list_groups().await?;

    Ok(Json(GroupListResponse {
        items: groups
            .into_iter()
            .map(|g| GroupItem {
                id: g.id,
                name: g.name,
                created_at: g.created_at,
                transit_domains_count: g.transit_count,
                landing_domains_count: g.landing_count,
            })
            .collect(),
    }))
}

/// Creates a new group.
///
/// # Endpoint
///
/// `POST /api/groups`
///
/// # Errors
///
/// Returns 400 if the name is empty or too long.
/// Returns 409 if the name is already taken.
pub async fn create_group_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupItem>), AppError> {
    let group = state.group_service.create_group(&payload.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(GroupItem {
            id: group.id,
            name: group.name,
            created_at: group.created_at,
            transit_domains_count: 0,
            landing_domains_count: 0,
        }),
    ))
}

/// Returns a group with both of its domain sets.
///
/// # Endpoint
///
/// `GET /api/groups/{id}`
pub async fn group_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<GroupDetailResponse>, AppError> {
    let (group, transit, landing) = state.group_service.group_detail(id).await?;

    Ok(Json(GroupDetailResponse {
        group: GroupInfo {
            id: group.id,
            name: group.name,
            created_at: group.created_at,
        },
        transit_domains: transit.into_iter().map(Into::into).collect(),
        landing_domains: landing.into_iter().map(Into::into).collect(),
    }))
}

/// Deletes a group and all of its domains.
///
/// # Endpoint
///
/// `DELETE /api/groups/{id}`
pub async fn delete_group_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let group = state.group_service.delete_group(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Group \"{}\" deleted successfully.",
        group.name
    ))))
}

/// Bulk-adds landing domains to a group.
///
/// # Endpoint
///
/// `POST /api/groups/{id}/landing_domains`
///
/// # Errors
///
/// Returns 400 if no urls were provided.
/// Returns 404 if the group does not exist.
pub async fn add_landing_domains_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<AddLandingDomainsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let urls = payload.urls.into_urls();
    if urls.is_empty() {
        return Err(AppError::bad_request(
            "Missing urls",
            serde_json::json!({}),
        ));
    }

    let added = state.group_service.add_landing_domains(id, urls).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Successfully added {added} landing domains."
        ))),
    ))
}

/// Bulk-adds transit domains to a group under a path policy.
///
/// # Endpoint
///
/// `POST /api/groups/{id}/transit_domains`
///
/// # Errors
///
/// Returns 400 if no urls were provided.
/// Returns 404 if the group does not exist.
pub async fn add_transit_domains_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<AddTransitDomainsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let urls = payload.urls.into_urls();
    if urls.is_empty() {
        return Err(AppError::bad_request(
            "Missing urls",
            serde_json::json!({}),
        ));
    }

    let spec = PathSpec::from_request(payload.path_type.as_deref(), payload.custom_path);
    let report = state
        .group_service
        .add_transit_domains(id, urls, &spec)
        .await?;

    let mut message = format!("Added {} new transit domains.", report.added);
    if report.skipped > 0 {
        message.push_str(&format!(
            " {} skipped (url+path combination already exists).",
            report.skipped
        ));
    }

    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}
