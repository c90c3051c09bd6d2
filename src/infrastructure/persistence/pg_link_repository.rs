//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL-backed link storage.
///
/// The unique index on `links.code` turns concurrent inserts of the same
/// code into [`AppError::CodeConflict`] via the error classification in
/// [`crate::error`].
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, long_url)
            VALUES ($1, $2)
            RETURNING id, code, long_url, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, long_url, created_at
            FROM links
            WHERE code = $1
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }
}
