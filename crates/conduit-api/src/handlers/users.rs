//! User and authentication handlers
//!
//! Registration, login, and the current-user endpoints.

use axum::{extract::State, Json};
use conduit_service::{
    LoginRequest, RegisterRequest, UpdateUserRequest, UserBody, UserService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserBody>>> {
    let service = UserService::new(state.service_context());
    let user = service.register(request.user).await?;
    Ok(Created(Json(UserBody::new(user))))
}

/// Login with email and password
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<UserBody>> {
    let service = UserService::new(state.service_context());
    let user = service
        .login(&request.user.email, &request.user.password)
        .await?;
    Ok(Json(UserBody::new(user)))
}

/// Get the current user
///
/// GET /api/user
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserBody>> {
    let service = UserService::new(state.service_context());
    let user = service.current(auth.user_id).await?;
    Ok(Json(UserBody::new(user)))
}

/// Update the current user
///
/// PUT /api/user
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserBody>> {
    let service = UserService::new(state.service_context());
    let user = service.update(auth.user_id, request.user).await?;
    Ok(Json(UserBody::new(user)))
}
