//! Group entity: a named pool linking transit domains to landing domains.

use chrono::{DateTime, Utc};

/// A domain pool. Owns its transit and landing domains exclusively; deleting
/// a group removes both sets.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Listing projection of a group with its domain counts.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupWithCounts {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub transit_count: i64,
    pub landing_count: i64,
}
