//! Authentication extractors
//!
//! Extracts and verifies bearer tokens from the Authorization header. The
//! API speaks the `Token <jwt>` scheme; `Bearer <jwt>` is accepted as an
//! alias since both appear in the wild.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token's subject claim
    pub user_id: i64,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

/// Pull the token out of an `Authorization: Token <jwt>` header value
fn parse_auth_header(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    (scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer"))
        .then_some(token)
}

/// Verify the token in the request against the configured secret
fn authenticate(parts: &Parts, state: &AppState) -> Result<Option<AuthUser>, ApiError> {
    let Some(header_value) = parts.headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header_value
        .to_str()
        .ok()
        .and_then(parse_auth_header)
        .ok_or(ApiError::InvalidAuthFormat)?;

    let claims = state.token_service().verify(token).map_err(|e| {
        tracing::warn!(error = %e, "token verification failed");
        ApiError::App(e)
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "invalid subject in token");
        ApiError::App(e)
    })?;

    Ok(Some(AuthUser::new(user_id)))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        authenticate(parts, &app_state)?.ok_or(ApiError::MissingAuth)
    }
}

/// Optional authenticated user
///
/// Resolves to `None` when no Authorization header is present. A header
/// that is present but malformed or carries an invalid token is still an
/// error - anonymous and broken are not the same thing.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The viewer's user ID, if authenticated
    pub fn user_id(&self) -> Option<i64> {
        self.0.as_ref().map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(OptionalAuthUser(authenticate(parts, &app_state)?))
    }
}
