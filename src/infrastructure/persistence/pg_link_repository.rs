//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewDynamicLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for dynamic link storage.
///
/// Uses parameterized queries throughout; "no rows" is mapped to `Ok(None)`
/// so the service can distinguish absence from driver failures.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn query_params_by_host_and_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<String>, AppError> {
        let query_params = sqlx::query_scalar::<_, String>(
            r#"
            SELECT query_params
              FROM dynamic_links
             WHERE host = $1 AND path = $2
            "#,
        )
        .bind(host)
        .bind(path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(query_params)
    }

    async fn find_guessable_path(
        &self,
        host: &str,
        query_params: &str,
    ) -> Result<Option<String>, AppError> {
        let path = sqlx::query_scalar::<_, String>(
            r#"
            SELECT path
              FROM dynamic_links
             WHERE host = $1
               AND query_params = $2
               AND is_unguessable_path = FALSE
             LIMIT 1
            "#,
        )
        .bind(host)
        .bind(query_params)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(path)
    }

    async fn insert_link(&self, link: NewDynamicLink) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO dynamic_links (host, path, query_params, is_unguessable_path)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&link.host)
        .bind(&link.path)
        .bind(&link.query_params)
        .bind(link.is_unguessable)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
