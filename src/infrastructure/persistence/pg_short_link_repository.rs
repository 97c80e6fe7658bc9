//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses the runtime query API with bound parameters throughout.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    name: String,
    url: String,
    key: Uuid,
    expiration_date: DateTime<Utc>,
    hits: i64,
    last_used: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink {
            id: row.id,
            name: row.name,
            url: row.url,
            key: row.key,
            expiration_date: row.expiration_date,
            hits: row.hits,
            last_used: row.last_used,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (name, url, key, expiration_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, url, key, expiration_date, hits, last_used, created_at
            "#,
        )
        .bind(&new_link.name)
        .bind(&new_link.url)
        .bind(new_link.key)
        .bind(new_link.expiration_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, name, url, key, expiration_date, hits, last_used, created_at
            FROM short_links
            WHERE name = $1 AND expiration_date >= NOW()
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update_by_name_and_key(
        &self,
        name: &str,
        key: Uuid,
        patch: ShortLinkPatch,
    ) -> Result<bool, AppError> {
        // Authorization and mutation happen in the same statement; a name/key
        // mismatch simply matches zero rows.
        let result = sqlx::query(
            r#"
            UPDATE short_links
            SET url = COALESCE($3, url),
                expiration_date = COALESCE($4, expiration_date)
            WHERE name = $1 AND key = $2
            "#,
        )
        .bind(name)
        .bind(key)
        .bind(patch.url)
        .bind(patch.expiration_date)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_name_and_key(&self, name: &str, key: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_links WHERE name = $1 AND key = $2")
            .bind(name)
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_hit(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE short_links SET hits = hits + 1, last_used = NOW() WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
