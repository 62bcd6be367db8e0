//! Comment service
//!
//! Handles commenting on articles, comment deletion, and listing.

use conduit_core::traits::NewComment;
use conduit_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateComment};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to the article behind the slug
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: i64,
        slug: &str,
        request: CreateComment,
    ) -> ServiceResult<CommentResponse> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(NewComment {
                article_id: article.id,
                author_id: user_id,
                body: &request.body,
            })
            .await?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound))?;

        info!(comment_id = comment.id, article_id = article.id, "comment created");

        Ok(CommentResponse {
            id: comment.id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            body: comment.body,
            author: author.profile(false).into(),
        })
    }

    /// Delete a comment. Only its author may do this.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, slug: &str, comment_id: i64) -> ServiceResult<()> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::CommentNotFound))?;

        // A comment id under the wrong slug is indistinguishable from a
        // missing comment.
        if comment.article_id != article.id {
            return Err(ServiceError::Domain(DomainError::CommentNotFound));
        }

        if !comment.is_authored_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotAuthorized));
        }

        self.ctx.comment_repo().delete(comment.id).await?;

        info!(comment_id = comment.id, "comment deleted");
        Ok(())
    }

    /// List an article's comments, oldest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        slug: &str,
        viewer_id: Option<i64>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        let views = self
            .ctx
            .comment_repo()
            .list_for_article(article.id, viewer_id)
            .await?;

        Ok(views.into_iter().map(CommentResponse::from).collect())
    }
}
