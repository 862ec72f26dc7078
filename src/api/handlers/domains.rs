//! Handlers for the cross-group domain overview.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::common::MessageResponse;
use crate::api::dto::domain::{
    DeleteDomainsRequest, DeleteDomainsResponse, DomainListResponse, DomainOverviewItem,
};
use crate::api::dto::pagination::DomainQueryParams;
use crate::domain::entities::DomainStatus;
use crate::domain::repositories::LandingFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Paginated landing-domain overview across all groups.
///
/// # Endpoint
///
/// `GET /api/domains`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `per_page` (optional): Items per page (default: 10, max: 100)
/// - `status` (optional): `pending`, `safe` or `unsafe`
/// - `search` (optional): Substring match against the url
///
/// # Errors
///
/// Returns 400 on invalid pagination or an unknown status value.
pub async fn list_domains_handler(
    State(state): State<AppState>,
    Query(params): Query<DomainQueryParams>,
) -> Result<Json<DomainListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let status = match params.status.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(DomainStatus::parse(raw).ok_or_else(|| {
            AppError::bad_request("Unknown status filter", json!({ "status": raw }))
        })?),
    };

    let filter = LandingFilter {
        status,
        search: params.search,
        offset,
        limit,
    };

    let (rows, total) = state.group_service.landing_overview(&filter).await?;

    let page = params.pagination.page.unwrap_or(1);
    let per_page = params.pagination.per_page.unwrap_or(10);
    let pages = ((total as f64) / (per_page as f64)).ceil() as u32;

    Ok(Json(DomainListResponse {
        domains: rows
            .into_iter()
            .map(|r| DomainOverviewItem {
                id: r.id,
                url: r.url,
                status: r.status,
                last_checked: r.last_checked_at,
                group_name: r.group_name,
            })
            .collect(),
        total,
        pages,
        current_page: page,
    }))
}

/// Bulk-deletes landing domains by id.
///
/// # Endpoint
///
/// `DELETE /api/domains`
///
/// # Errors
///
/// Returns 400 if the id list is empty.
pub async fn delete_domains_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteDomainsRequest>,
) -> Result<Json<DeleteDomainsResponse>, AppError> {
    if payload.ids.is_empty() {
        return Err(AppError::bad_request("Missing domain ids", json!({})));
    }

    let deleted = state
        .group_service
        .delete_landing_domains(&payload.ids)
        .await?;

    Ok(Json(DeleteDomainsResponse {
        message: "Domains deleted successfully.".to_string(),
        deleted,
    }))
}

/// Deletes a single transit domain.
///
/// # Endpoint
///
/// `DELETE /api/transit_domains/{id}`
pub async fn delete_transit_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.group_service.delete_transit_domain(id).await?;

    Ok(Json(MessageResponse::new(
        "Transit domain deleted successfully.",
    )))
}
