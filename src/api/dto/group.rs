//! DTOs for group management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{LandingDomainItem, TransitDomainItem};
use crate::utils::url_list::split_url_list;

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Group listing entry with its domain counts.
#[derive(Debug, Serialize)]
pub struct GroupItem {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub transit_domains_count: i64,
    pub landing_domains_count: i64,
}

#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub items: Vec<GroupItem>,
}

#[derive(Debug, Serialize)]
pub struct GroupDetailResponse {
    pub group: GroupInfo,
    pub transit_domains: Vec<TransitDomainItem>,
    pub landing_domains: Vec<LandingDomainItem>,
}

#[derive(Debug, Serialize)]
pub struct GroupInfo {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Bulk URL input: either a JSON list or a pasted text blob with entries
/// separated by whitespace, commas or semicolons.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlsInput {
    List(Vec<String>),
    Text(String),
}

impl UrlsInput {
    pub fn into_urls(self) -> Vec<String> {
        match self {
            UrlsInput::List(urls) => urls
                .into_iter()
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect(),
            UrlsInput::Text(blob) => split_url_list(&blob),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddLandingDomainsRequest {
    pub urls: UrlsInput,
}

#[derive(Debug, Deserialize)]
pub struct AddTransitDomainsRequest {
    pub urls: UrlsInput,
    /// `default`, `custom` or `random`.
    pub path_type: Option<String>,
    pub custom_path: Option<String>,
}
