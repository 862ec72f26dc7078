//! Landing domain entity: a final destination visitors are routed to.

use chrono::{DateTime, Utc};

use super::DomainStatus;

/// A destination URL, unique across all groups.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LandingDomain {
    pub id: i64,
    pub url: String,
    pub status: DomainStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub group_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a landing domain.
#[derive(Debug, Clone)]
pub struct NewLandingDomain {
    pub url: String,
    pub group_id: i64,
}
