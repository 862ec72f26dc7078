//! SQLite implementation of the group repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Group, GroupWithCounts};
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;

pub struct SqliteGroupRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteGroupRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for SqliteGroupRepository {
    async fn create(&self, name: &str) -> Result<Group, AppError> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(group)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, name, created_at FROM groups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(group)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, name, created_at FROM groups WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(group)
    }

    async fn list(&self) -> Result<Vec<GroupWithCounts>, AppError> {
        let groups = sqlx::query_as::<_, GroupWithCounts>(
            r#"
            SELECT
                g.id,
                g.name,
                g.created_at,
                (SELECT COUNT(*) FROM transit_domains t WHERE t.group_id = g.id) AS transit_count,
                (SELECT COUNT(*) FROM landing_domains l WHERE l.group_id = g.id) AS landing_count
            FROM groups g
            ORDER BY g.created_at DESC, g.id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(groups)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // Cascade is applied explicitly so it holds even with foreign-key
        // enforcement disabled on a connection.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM transit_domains WHERE group_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM landing_domains WHERE group_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM groups WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
