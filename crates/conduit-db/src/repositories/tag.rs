//! PostgreSQL implementation of TagRepository
//!
//! Tags are created on demand inside the article-creation transaction
//! (see `PgArticleRepository::create`); this repository only reads.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::traits::{RepoResult, TagRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT name FROM tags ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(names)
    }
}
