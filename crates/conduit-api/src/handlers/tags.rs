//! Tag handlers

use axum::{extract::State, Json};
use conduit_service::{TagService, TagsBody};

use crate::response::ApiResult;
use crate::state::AppState;

/// List all tags
///
/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<TagsBody>> {
    let service = TagService::new(state.service_context());
    let tags = service.list().await?;
    Ok(Json(tags))
}
