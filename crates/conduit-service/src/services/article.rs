//! Article service
//!
//! Handles article creation, hydrated reads, updates, deletion, favorites,
//! and the listing/feed queries.

use conduit_core::traits::{ArticleFilter, ArticlePatch, NewArticle};
use conduit_core::{DomainError, Slug};
use tracing::{info, instrument};

use crate::dto::{ArticleResponse, ArticlesBody, CreateArticle, UpdateArticle};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Article service
pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    /// Create a new ArticleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an article. The slug is derived from the title here and never
    /// changes afterwards; tags are linked in input order.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: i64,
        request: CreateArticle,
    ) -> ServiceResult<ArticleResponse> {
        let slug = Slug::from_title(&request.title);
        if slug.is_empty() {
            return Err(ServiceError::validation(
                "title must contain at least one sluggable character",
            ));
        }

        // Repeated tag names collapse to their first occurrence, keeping
        // the input order for the visible list.
        let mut tags: Vec<String> = Vec::new();
        for name in request.tag_list.unwrap_or_default() {
            if !tags.contains(&name) {
                tags.push(name);
            }
        }

        let article = self
            .ctx
            .article_repo()
            .create(NewArticle {
                author_id,
                slug: slug.as_str(),
                title: &request.title,
                description: &request.description,
                body: &request.body,
                tags: &tags,
            })
            .await?;

        info!(article_id = article.id, slug = %article.slug, "article created");

        // A fresh article has no favorites and the author does not follow
        // themselves, so the view can be assembled without re-querying.
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound))?;

        Ok(ArticleResponse {
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: false,
            favorites_count: 0,
            author: author.profile(false).into(),
        })
    }

    /// Get the hydrated view of an article
    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str, viewer_id: Option<i64>) -> ServiceResult<ArticleResponse> {
        let view = self
            .ctx
            .article_repo()
            .view_by_slug(slug, viewer_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        Ok(view.into())
    }

    /// Update an article. Only the author may do this, and the slug stays
    /// stable even when the title changes.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: i64,
        slug: &str,
        request: UpdateArticle,
    ) -> ServiceResult<ArticleResponse> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        if !article.is_authored_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotAuthorized));
        }

        self.ctx
            .article_repo()
            .update(
                article.id,
                ArticlePatch {
                    title: request.title,
                    description: request.description,
                    body: request.body,
                },
            )
            .await?;

        info!(article_id = article.id, "article updated");

        self.get(slug, Some(user_id)).await
    }

    /// Delete an article. Only the author may do this; tag links, favorites,
    /// and comments cascade away with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, slug: &str) -> ServiceResult<()> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        if !article.is_authored_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotAuthorized));
        }

        self.ctx.article_repo().delete(article.id).await?;

        info!(article_id = article.id, "article deleted");
        Ok(())
    }

    /// Favorite an article. Idempotent, but authors may not favorite their
    /// own work.
    #[instrument(skip(self))]
    pub async fn favorite(&self, user_id: i64, slug: &str) -> ServiceResult<ArticleResponse> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        if article.is_authored_by(user_id) {
            return Err(ServiceError::Domain(DomainError::AuthorCannotFavorite));
        }

        self.ctx
            .article_repo()
            .add_favorite(user_id, article.id)
            .await?;

        self.get(slug, Some(user_id)).await
    }

    /// Unfavorite an article. A no-op when it was not favorited.
    #[instrument(skip(self))]
    pub async fn unfavorite(&self, user_id: i64, slug: &str) -> ServiceResult<ArticleResponse> {
        let article = self
            .ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ArticleNotFound))?;

        self.ctx
            .article_repo()
            .remove_favorite(user_id, article.id)
            .await?;

        self.get(slug, Some(user_id)).await
    }

    /// List articles matching the filter, newest first
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        filter: ArticleFilter,
        viewer_id: Option<i64>,
    ) -> ServiceResult<ArticlesBody> {
        let page = self.ctx.article_repo().list(&filter, viewer_id).await?;

        Ok(ArticlesBody {
            articles: page.items.into_iter().map(ArticleResponse::from).collect(),
            articles_count: page.total,
        })
    }

    /// The personal feed: articles by authors the user follows
    #[instrument(skip(self))]
    pub async fn feed(&self, user_id: i64, limit: i64, offset: i64) -> ServiceResult<ArticlesBody> {
        let page = self.ctx.article_repo().feed(user_id, limit, offset).await?;

        Ok(ArticlesBody {
            articles: page.items.into_iter().map(ArticleResponse::from).collect(),
            articles_count: page.total,
        })
    }
}
