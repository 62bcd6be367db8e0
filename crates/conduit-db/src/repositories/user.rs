//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::entities::User;
use conduit_core::error::DomainError;
use conduit_core::traits::{NewUser, RepoResult, UserPatch, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, new_user), fields(username = new_user.username))]
    async fn create(&self, new_user: NewUser<'_>) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, bio, image, created_at, updated_at
            ",
        )
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: UserPatch) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET username      = COALESCE($2::text, username),
                email         = COALESCE($3::text, email),
                password_hash = COALESCE($4::text, password_hash),
                bio           = COALESCE($5::text, bio),
                image         = COALESCE($6::text, image),
                updated_at    = now()
            WHERE id = $1
            RETURNING id, username, email, password_hash, bio, image, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(patch.username)
        .bind(patch.email)
        .bind(patch.password_hash)
        .bind(patch.bio)
        .bind(patch.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(User::from).ok_or(DomainError::UserNotFound)
    }
}
