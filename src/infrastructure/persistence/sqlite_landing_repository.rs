//! SQLite implementation of the landing domain repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{DomainStatus, LandingDomain, NewLandingDomain};
use crate::domain::repositories::{
    LandingDomainRepository, LandingFilter, LandingOverviewRow, StatusCounts,
};
use crate::error::AppError;

const COLUMNS: &str = "id, url, status, last_checked_at, group_id, created_at";

pub struct SqliteLandingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLandingRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// `%search%` pattern for the url LIKE filter, or None when unfiltered.
fn like_pattern(filter: &LandingFilter) -> Option<String> {
    filter
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{s}%"))
}

#[async_trait]
impl LandingDomainRepository for SqliteLandingRepository {
    async fn create(&self, new: NewLandingDomain) -> Result<LandingDomain, AppError> {
        let domain = sqlx::query_as::<_, LandingDomain>(&format!(
            r#"
            INSERT INTO landing_domains (url, status, group_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(&new.url)
        .bind(DomainStatus::Pending)
        .bind(new.group_id)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn exists(&self, url: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM landing_domains WHERE url = ?")
            .bind(url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<LandingDomain>, AppError> {
        let domains = sqlx::query_as::<_, LandingDomain>(&format!(
            "SELECT {COLUMNS} FROM landing_domains WHERE group_id = ? ORDER BY created_at DESC, id DESC",
        ))
        .bind(group_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn find_safe_by_group(&self, group_id: i64) -> Result<Vec<LandingDomain>, AppError> {
        let domains = sqlx::query_as::<_, LandingDomain>(&format!(
            "SELECT {COLUMNS} FROM landing_domains WHERE group_id = ? AND status = ?",
        ))
        .bind(group_id)
        .bind(DomainStatus::Safe)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn list_overview(
        &self,
        filter: &LandingFilter,
    ) -> Result<Vec<LandingOverviewRow>, AppError> {
        let status = filter.status.map(DomainStatus::as_str);
        let pattern = like_pattern(filter);

        let rows = sqlx::query_as::<_, LandingOverviewRow>(
            r#"
            SELECT d.id, d.url, d.status, d.last_checked_at, g.name AS group_name
            FROM landing_domains d
            LEFT JOIN groups g ON g.id = d.group_id
            WHERE (?1 IS NULL OR d.status = ?1)
              AND (?2 IS NULL OR d.url LIKE ?2)
            ORDER BY d.created_at DESC, d.id DESC
            LIMIT ?3 OFFSET ?4
            "#,
        )
        .bind(status)
        .bind(pattern)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count_overview(&self, filter: &LandingFilter) -> Result<i64, AppError> {
        let status = filter.status.map(DomainStatus::as_str);
        let pattern = like_pattern(filter);

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM landing_domains d
            WHERE (?1 IS NULL OR d.status = ?1)
              AND (?2 IS NULL OR d.url LIKE ?2)
            "#,
        )
        .bind(status)
        .bind(pattern)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM landing_domains WHERE id IN ({placeholders})");

        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let result = query.execute(self.pool.as_ref()).await?;

        Ok(result.rows_affected())
    }

    async fn status_counts(&self) -> Result<StatusCounts, AppError> {
        let counts = sqlx::query_as::<_, StatusCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(SUM(status = 'safe'), 0) AS safe,
                COALESCE(SUM(status = 'unsafe'), 0) AS unsafe_count,
                COALESCE(SUM(status = 'pending'), 0) AS pending
            FROM landing_domains
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(counts)
    }
}
