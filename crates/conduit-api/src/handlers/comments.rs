//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use conduit_service::{CommentBody, CommentService, CommentsBody, CreateCommentRequest};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a comment to an article
///
/// POST /api/articles/{slug}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentBody>>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .create(auth.user_id, &slug, request.comment)
        .await?;
    Ok(Created(Json(CommentBody::new(comment))))
}

/// List the comments of an article
///
/// GET /api/articles/{slug}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<CommentsBody>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list(&slug, viewer.user_id()).await?;
    Ok(Json(CommentsBody { comments }))
}

/// Delete a comment
///
/// DELETE /api/articles/{slug}/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((slug, comment_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let comment_id: i64 = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("invalid comment id"))?;

    let service = CommentService::new(state.service_context());
    service.delete(auth.user_id, &slug, comment_id).await?;
    Ok(NoContent)
}
