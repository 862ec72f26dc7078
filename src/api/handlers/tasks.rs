//! Handlers for health-check triggering and scheduler control.

use axum::{Json, extract::State};

use crate::api::dto::common::MessageResponse;
use crate::api::dto::scheduler::SchedulerStatusResponse;
use crate::scheduler::SchedulerStatus;
use crate::state::AppState;

/// Fires one health-check run immediately, independent of the timer.
///
/// # Endpoint
///
/// `POST /api/tasks/run_check`
///
/// Fire-and-forget: responds as soon as the run is spawned; counts are
/// logged when the run finishes.
pub async fn run_check_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.scheduler.trigger();

    Json(MessageResponse::new("Health check job triggered."))
}

/// Suspends scheduled health-check runs.
///
/// # Endpoint
///
/// `POST /api/scheduler/pause`
pub async fn scheduler_pause_handler(State(state): State<AppState>) -> Json<SchedulerStatusResponse> {
    state.scheduler.pause();

    Json(SchedulerStatusResponse {
        status: "paused",
        next_run: None,
    })
}

/// Re-enables scheduled health-check runs.
///
/// # Endpoint
///
/// `POST /api/scheduler/resume`
pub async fn scheduler_resume_handler(
    State(state): State<AppState>,
) -> Json<SchedulerStatusResponse> {
    state.scheduler.resume();

    let next_run = match state.scheduler.status().await {
        SchedulerStatus::Running { next_run } => next_run,
        _ => None,
    };

    Json(SchedulerStatusResponse {
        status: "running",
        next_run,
    })
}

/// Reports the scheduler state.
///
/// # Endpoint
///
/// `GET /api/scheduler/status`
pub async fn scheduler_status_handler(
    State(state): State<AppState>,
) -> Json<SchedulerStatusResponse> {
    let response = match state.scheduler.status().await {
        SchedulerStatus::Running { next_run } => SchedulerStatusResponse {
            status: "running",
            next_run,
        },
        SchedulerStatus::Paused => SchedulerStatusResponse {
            status: "paused",
            next_run: None,
        },
        SchedulerStatus::NotFound => SchedulerStatusResponse {
            status: "not_found",
            next_run: None,
        },
    };

    Json(response)
}
