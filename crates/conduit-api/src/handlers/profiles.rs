//! Profile handlers
//!
//! Public profiles and follow/unfollow.

use axum::{
    extract::{Path, State},
    Json,
};
use conduit_service::{ProfileBody, ProfileService};

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a profile
///
/// GET /api/profiles/{username}
pub async fn get_profile(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileBody>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.get(&username, viewer.user_id()).await?;
    Ok(Json(ProfileBody::new(profile)))
}

/// Follow a user
///
/// POST /api/profiles/{username}/follow
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileBody>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.follow(auth.user_id, &username).await?;
    Ok(Json(ProfileBody::new(profile)))
}

/// Unfollow a user
///
/// DELETE /api/profiles/{username}/follow
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileBody>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.unfollow(auth.user_id, &username).await?;
    Ok(Json(ProfileBody::new(profile)))
}
