//! DTOs for scheduler control.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SchedulerStatusResponse {
    /// `running`, `paused` or `not_found`.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
}
