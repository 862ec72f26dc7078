//! Repository trait for transit domain data access.

use crate::domain::entities::{NewTransitDomain, TransitDomain};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for transit domains (redirect endpoints).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransitDomainRepository: Send + Sync {
    /// Registers a transit domain with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the `(url, path)` pair already exists.
    async fn create(&self, new: NewTransitDomain) -> Result<TransitDomain, AppError>;

    /// Whether a `(url, path)` pair is already registered, regardless of status.
    async fn exists(&self, url: &str, path: &str) -> Result<bool, AppError>;

    /// Exact `(host, path)` lookup regardless of health, for admin dry-runs.
    async fn find_by_host_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<TransitDomain>, AppError>;

    /// Exact `(host, path)` lookup restricted to `safe` rows.
    ///
    /// The redirect path goes through this: a transit link that exists but is
    /// `pending` or `unsafe` resolves to `None` here.
    async fn find_safe_by_host_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<TransitDomain>, AppError>;

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<TransitDomain>, AppError>;

    /// Returns `Ok(false)` if no row with that id exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
