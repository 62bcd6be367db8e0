//! Service context - dependency container for services
//!
//! Holds the repositories, the token service, and the database pool needed
//! by the services and the health probes.

use std::sync::Arc;

use conduit_common::auth::TokenService;
use conduit_core::traits::{
    ArticleRepository, CommentRepository, FollowRepository, TagRepository, UserRepository,
};
use conduit_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for readiness probes)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    tag_repo: Arc<dyn TagRepository>,

    // Token issuance / verification
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        tag_repo: Arc<dyn TagRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            article_repo,
            comment_repo,
            follow_repo,
            tag_repo,
            token_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the article repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    article_repo: Option<Arc<dyn ArticleRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::internal("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.article_repo.ok_or_else(|| ServiceError::internal("article_repo is required"))?,
            self.comment_repo.ok_or_else(|| ServiceError::internal("comment_repo is required"))?,
            self.follow_repo.ok_or_else(|| ServiceError::internal("follow_repo is required"))?,
            self.tag_repo.ok_or_else(|| ServiceError::internal("tag_repo is required"))?,
            self.token_service.ok_or_else(|| ServiceError::internal("token_service is required"))?,
        ))
    }
}
