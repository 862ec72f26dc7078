//! SQLite implementation of the health-check run repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{LandingDomain, TransitDomain};
use crate::domain::repositories::{CheckRepository, StatusUpdate};
use crate::error::AppError;

pub struct SqliteCheckRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCheckRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn due_clause(include_unsafe: bool) -> &'static str {
    if include_unsafe {
        "1 = 1"
    } else {
        "status IN ('pending', 'safe')"
    }
}

#[async_trait]
impl CheckRepository for SqliteCheckRepository {
    async fn due_transit(&self, include_unsafe: bool) -> Result<Vec<TransitDomain>, AppError> {
        let domains = sqlx::query_as::<_, TransitDomain>(&format!(
            "SELECT id, url, path, status, last_checked_at, group_id, created_at
             FROM transit_domains WHERE {}",
            due_clause(include_unsafe),
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn due_landing(&self, include_unsafe: bool) -> Result<Vec<LandingDomain>, AppError> {
        let domains = sqlx::query_as::<_, LandingDomain>(&format!(
            "SELECT id, url, status, last_checked_at, group_id, created_at
             FROM landing_domains WHERE {}",
            due_clause(include_unsafe),
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn commit_run(
        &self,
        transit: &[StatusUpdate],
        landing: &[StatusUpdate],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for update in transit {
            sqlx::query("UPDATE transit_domains SET status = ?, last_checked_at = ? WHERE id = ?")
                .bind(update.status)
                .bind(update.checked_at)
                .bind(update.id)
                .execute(&mut *tx)
                .await?;
        }

        for update in landing {
            sqlx::query("UPDATE landing_domains SET status = ?, last_checked_at = ? WHERE id = ?")
                .bind(update.status)
                .bind(update.checked_at)
                .bind(update.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
