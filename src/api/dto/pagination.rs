//! Pagination and filtering query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `per_page`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(10);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&per_page) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        Ok((offset, limit))
    }
}

/// Query parameters of the landing domain overview.
#[derive(Debug, Deserialize)]
pub struct DomainQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Filter by health status (`pending`, `safe`, `unsafe`).
    pub status: Option<String>,

    /// Substring match against the url.
    pub search: Option<String>,
}
