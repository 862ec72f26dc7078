//! DTOs for transit and landing domain management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DomainStatus, LandingDomain, TransitDomain};

#[derive(Debug, Serialize)]
pub struct TransitDomainItem {
    pub id: i64,
    pub url: String,
    pub path: String,
    /// Combined clickable form, e.g. `http://go1.example.com/go`.
    pub full_url: String,
    pub status: DomainStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub group_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<TransitDomain> for TransitDomainItem {
    fn from(d: TransitDomain) -> Self {
        let full_url = d.full_url();
        Self {
            id: d.id,
            url: d.url,
            path: d.path,
            full_url,
            status: d.status,
            last_checked_at: d.last_checked_at,
            group_id: d.group_id,
            created_at: d.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LandingDomainItem {
    pub id: i64,
    pub url: String,
    pub status: DomainStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub group_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LandingDomain> for LandingDomainItem {
    fn from(d: LandingDomain) -> Self {
        Self {
            id: d.id,
            url: d.url,
            status: d.status,
            last_checked_at: d.last_checked_at,
            group_id: d.group_id,
            created_at: d.created_at,
        }
    }
}

/// Cross-group overview entry.
#[derive(Debug, Serialize)]
pub struct DomainOverviewItem {
    pub id: i64,
    pub url: String,
    pub status: DomainStatus,
    pub last_checked: Option<DateTime<Utc>>,
    pub group_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainOverviewItem>,
    pub total: i64,
    pub pages: u32,
    pub current_page: u32,
}

#[derive(Debug, Deserialize)]
pub struct DeleteDomainsRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteDomainsResponse {
    pub message: String,
    pub deleted: u64,
}
