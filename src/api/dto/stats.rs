//! DTOs for dashboard statistics.

use serde::Serialize;

/// Landing-domain status breakdown.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: i64,
    pub safe: i64,
    #[serde(rename = "unsafe")]
    pub unsafe_count: i64,
    pub pending: i64,
}
