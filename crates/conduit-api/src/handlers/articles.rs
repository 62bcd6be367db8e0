//! Article handlers
//!
//! CRUD, favorites, the global listing, and the personal feed.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use conduit_core::traits::ArticleFilter;
use conduit_service::{
    ArticleBody, ArticleService, ArticlesBody, CreateArticleRequest, UpdateArticleRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Listing filters from the query string
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
}

/// List articles
///
/// GET /api/articles?tag=&author=&favorited=&limit=&offset=
pub async fn list_articles(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(params): Query<ListParams>,
    pagination: Pagination,
) -> ApiResult<Json<ArticlesBody>> {
    let filter = ArticleFilter {
        tag: params.tag,
        author: params.author,
        favorited_by: params.favorited,
        limit: pagination.limit,
        offset: pagination.offset,
    };

    let service = ArticleService::new(state.service_context());
    let articles = service.list(filter, viewer.user_id()).await?;
    Ok(Json(articles))
}

/// The personal feed: articles by followed authors
///
/// GET /api/articles/feed?limit=&offset=
pub async fn feed(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<ArticlesBody>> {
    let service = ArticleService::new(state.service_context());
    let articles = service
        .feed(auth.user_id, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(articles))
}

/// Get an article
///
/// GET /api/articles/{slug}
pub async fn get_article(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleBody>> {
    let service = ArticleService::new(state.service_context());
    let article = service.get(&slug, viewer.user_id()).await?;
    Ok(Json(ArticleBody::new(article)))
}

/// Create an article
///
/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> ApiResult<Created<Json<ArticleBody>>> {
    let service = ArticleService::new(state.service_context());
    let article = service.create(auth.user_id, request.article).await?;
    Ok(Created(Json(ArticleBody::new(article))))
}

/// Update an article
///
/// PUT /api/articles/{slug}
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<Json<ArticleBody>> {
    let service = ArticleService::new(state.service_context());
    let article = service.update(auth.user_id, &slug, request.article).await?;
    Ok(Json(ArticleBody::new(article)))
}

/// Delete an article
///
/// DELETE /api/articles/{slug}
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<NoContent> {
    let service = ArticleService::new(state.service_context());
    service.delete(auth.user_id, &slug).await?;
    Ok(NoContent)
}

/// Favorite an article
///
/// POST /api/articles/{slug}/favorite
pub async fn favorite_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleBody>> {
    let service = ArticleService::new(state.service_context());
    let article = service.favorite(auth.user_id, &slug).await?;
    Ok(Json(ArticleBody::new(article)))
}

/// Unfavorite an article
///
/// DELETE /api/articles/{slug}/favorite
pub async fn unfavorite_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleBody>> {
    let service = ArticleService::new(state.service_context());
    let article = service.unfavorite(auth.user_id, &slug).await?;
    Ok(Json(ArticleBody::new(article)))
}
