//! Transit domain entity: a public redirect endpoint (hostname + path).

use chrono::{DateTime, Utc};

use super::DomainStatus;

/// A hostname + path pair visitors hit first. The same host can serve several
/// independent redirect paths; the `(url, path)` pair is globally unique.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransitDomain {
    pub id: i64,
    pub url: String,
    pub path: String,
    pub status: DomainStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub group_id: i64,
    pub created_at: DateTime<Utc>,
}

impl TransitDomain {
    /// Target handed to the safety prober: hostname concatenated with path,
    /// scheme left for the prober to normalize.
    pub fn probe_target(&self) -> String {
        format!("{}{}", self.url, self.path)
    }

    /// Full clickable URL shown in the management API.
    pub fn full_url(&self) -> String {
        format!("http://{}{}", self.url, self.path)
    }
}

/// Input data for registering a transit domain.
#[derive(Debug, Clone)]
pub struct NewTransitDomain {
    pub url: String,
    pub path: String,
    pub group_id: i64,
}
