//! Repository trait for health-check run selection and commit.

use crate::domain::entities::{DomainStatus, LandingDomain, TransitDomain};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One probe outcome to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: DomainStatus,
    pub checked_at: DateTime<Utc>,
}

/// Data access used by the health-check engine.
///
/// Kept separate from the CRUD repositories because a run needs one property
/// the others do not: all of its status writes must land in a single commit,
/// so a concurrent resolver lookup never observes a half-applied run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckRepository: Send + Sync {
    /// Transit domains eligible for probing: `pending` and `safe` rows, plus
    /// `unsafe` rows when `include_unsafe` is set.
    async fn due_transit(&self, include_unsafe: bool) -> Result<Vec<TransitDomain>, AppError>;

    /// Landing domains eligible for probing, same selection rule.
    async fn due_landing(&self, include_unsafe: bool) -> Result<Vec<LandingDomain>, AppError>;

    /// Applies every status + `last_checked_at` update of a run in one
    /// transaction.
    async fn commit_run(
        &self,
        transit: &[StatusUpdate],
        landing: &[StatusUpdate],
    ) -> Result<(), AppError>;
}
