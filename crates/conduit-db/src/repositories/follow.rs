//! PostgreSQL implementation of FollowRepository
//!
//! Follow edges are written idempotently with ON CONFLICT DO NOTHING; the
//! self-follow rule is enforced by the `prevent_self_follow` CHECK in the
//! schema and surfaces here through constraint translation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::entities::Profile;
use conduit_core::traits::{FollowRepository, RepoResult};

use crate::models::ProfileModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn follow(&self, follower_id: i64, following_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO follows (follower_id, following_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, following_id) DO NOTHING
            ",
        )
        .bind(follower_id)
        .bind(following_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, follower_id: i64, following_id: i64) -> RepoResult<()> {
        // No row is a no-op: unfollowing twice is allowed.
        sqlx::query(
            r"
            DELETE FROM follows WHERE follower_id = $1 AND following_id = $2
            ",
        )
        .bind(follower_id)
        .bind(following_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_following(&self, follower_id: i64, following_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2
            )
            ",
        )
        .bind(follower_id)
        .bind(following_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn profile_by_username(
        &self,
        username: &str,
        viewer_id: Option<i64>,
    ) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT u.username, u.bio, u.image,
                   EXISTS(SELECT 1 FROM follows fo
                           WHERE fo.follower_id = $2::bigint
                             AND fo.following_id = u.id) AS following
            FROM users u
            WHERE u.username = $1
            ",
        )
        .bind(username)
        .bind(viewer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }
}
