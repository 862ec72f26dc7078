//! Handler for dashboard statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Landing-domain status breakdown for the dashboard.
///
/// # Endpoint
///
/// `GET /api/stats`
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let counts = state.group_service.stats().await?;

    Ok(Json(StatsResponse {
        total: counts.total,
        safe: counts.safe,
        unsafe_count: counts.unsafe_count,
        pending: counts.pending,
    }))
}
