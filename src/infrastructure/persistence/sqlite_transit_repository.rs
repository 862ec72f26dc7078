//! SQLite implementation of the transit domain repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{DomainStatus, NewTransitDomain, TransitDomain};
use crate::domain::repositories::TransitDomainRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, url, path, status, last_checked_at, group_id, created_at";

pub struct SqliteTransitRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTransitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransitDomainRepository for SqliteTransitRepository {
    async fn create(&self, new: NewTransitDomain) -> Result<TransitDomain, AppError> {
        let domain = sqlx::query_as::<_, TransitDomain>(&format!(
            r#"
            INSERT INTO transit_domains (url, path, status, group_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&new.url)
        .bind(&new.path)
        .bind(DomainStatus::Pending)
        .bind(new.group_id)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn exists(&self, url: &str, path: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM transit_domains WHERE url = ? AND path = ?",
        )
        .bind(url)
        .bind(path)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count > 0)
    }

    async fn find_by_host_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<TransitDomain>, AppError> {
        let domain = sqlx::query_as::<_, TransitDomain>(&format!(
            "SELECT {COLUMNS} FROM transit_domains WHERE url = ? AND path = ?",
        ))
        .bind(host)
        .bind(path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn find_safe_by_host_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<TransitDomain>, AppError> {
        let domain = sqlx::query_as::<_, TransitDomain>(&format!(
            "SELECT {COLUMNS} FROM transit_domains WHERE url = ? AND path = ? AND status = ?",
        ))
        .bind(host)
        .bind(path)
        .bind(DomainStatus::Safe)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<TransitDomain>, AppError> {
        let domains = sqlx::query_as::<_, TransitDomain>(&format!(
            "SELECT {COLUMNS} FROM transit_domains WHERE group_id = ? ORDER BY created_at DESC, id DESC",
        ))
        .bind(group_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transit_domains WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
