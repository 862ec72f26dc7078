//! Repository trait for group data access.

use crate::domain::entities::{Group, GroupWithCounts};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing groups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteGroupRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    async fn create(&self, name: &str) -> Result<Group, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, AppError>;

    /// Lists all groups, newest first, with their domain counts.
    async fn list(&self) -> Result<Vec<GroupWithCounts>, AppError>;

    /// Deletes a group and both of its domain sets in one transaction.
    ///
    /// Returns `Ok(false)` if no group with that id exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
