//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::entities::{Comment, CommentView};
use conduit_core::error::DomainError;
use conduit_core::traits::{CommentRepository, NewComment, RepoResult};

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, new_comment))]
    async fn create(&self, new_comment: NewComment<'_>) -> RepoResult<Comment> {
        let row = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (body, article_id, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, body, article_id, author_id, created_at, updated_at
            ",
        )
        .bind(new_comment.body)
        .bind(new_comment.article_id)
        .bind(new_comment.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, body, article_id, author_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_article(
        &self,
        article_id: i64,
        viewer_id: Option<i64>,
    ) -> RepoResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.body, c.article_id, c.author_id, c.created_at, c.updated_at,
                   u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                   EXISTS(SELECT 1 FROM follows fo
                           WHERE fo.follower_id = $2::bigint
                             AND fo.following_id = c.author_id) AS following
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.article_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            ",
        )
        .bind(article_id)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentView::from).collect())
    }
}
