//! DTOs for the redirect dry-run endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TestRedirectRequest {
    pub url: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct TestRedirectResponse {
    pub status: &'static str,
    pub landing_url: String,
    pub group_name: String,
}
