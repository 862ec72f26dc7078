//! Repository trait for landing domain data access.

use crate::domain::entities::{DomainStatus, LandingDomain, NewLandingDomain};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filters for the cross-group landing domain overview.
#[derive(Debug, Clone, Default)]
pub struct LandingFilter {
    pub status: Option<DomainStatus>,
    /// Substring match against the url.
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

/// Overview row joining each landing domain with its group name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LandingOverviewRow {
    pub id: i64,
    pub url: String,
    pub status: DomainStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub group_name: Option<String>,
}

/// Status breakdown across all landing domains.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct StatusCounts {
    pub total: i64,
    pub safe: i64,
    pub unsafe_count: i64,
    pub pending: i64,
}

/// Repository interface for landing domains (final destinations).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LandingDomainRepository: Send + Sync {
    /// Registers a landing domain with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the url already exists.
    async fn create(&self, new: NewLandingDomain) -> Result<LandingDomain, AppError>;

    async fn exists(&self, url: &str) -> Result<bool, AppError>;

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<LandingDomain>, AppError>;

    /// All `safe` landing domains of a group - the redirect candidate set,
    /// re-read fresh on every request.
    async fn find_safe_by_group(&self, group_id: i64) -> Result<Vec<LandingDomain>, AppError>;

    /// Paginated cross-group overview, newest first.
    async fn list_overview(
        &self,
        filter: &LandingFilter,
    ) -> Result<Vec<LandingOverviewRow>, AppError>;

    /// Total rows matching the same filter (ignoring pagination).
    async fn count_overview(&self, filter: &LandingFilter) -> Result<i64, AppError>;

    /// Bulk delete by id; returns the number of rows removed.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError>;

    async fn status_counts(&self) -> Result<StatusCounts, AppError>;
}
