//! User service
//!
//! Handles registration, login, and profile maintenance for the current
//! user. This is the only service that reads password hashes, and the only
//! place tokens are issued.

use conduit_common::auth::{hash_password, verify_password};
use conduit_common::AppError;
use conduit_core::traits::{NewUser, UserPatch};
use conduit_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{RegisterUser, UpdateUser, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and issue a token
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterUser) -> ServiceResult<UserResponse> {
        // Hash before touching the store: the KDF is slow on purpose and must
        // not run while a connection or transaction is held.
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(NewUser {
                username: &request.username,
                email: &request.email,
                password_hash: &password_hash,
            })
            .await?;

        info!(user_id = user.id, "user registered");

        let token = self
            .ctx
            .token_service()
            .issue(user.id)
            .map_err(ServiceError::from)?;

        Ok(UserResponse::with_token(&user, token))
    }

    /// Login with email and password, issuing a fresh token
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller: both surface as `InvalidCredentials`.
    #[instrument(skip(self, email, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "user logged in");

        let token = self
            .ctx
            .token_service()
            .issue(user.id)
            .map_err(ServiceError::from)?;

        Ok(UserResponse::with_token(&user, token))
    }

    /// Get the current authenticated user. No token is issued here; tokens
    /// are minted only on registration and login.
    #[instrument(skip(self))]
    pub async fn current(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound))?;

        Ok(UserResponse::from(&user))
    }

    /// Apply a partial update to the current user. Absent fields are left
    /// untouched; a present password is re-hashed before storage.
    #[instrument(skip(self, request))]
    pub async fn update(&self, user_id: i64, request: UpdateUser) -> ServiceResult<UserResponse> {
        let password_hash = match request.password.as_deref() {
            Some(password) => Some(
                hash_password(password).map_err(|e| ServiceError::internal(e.to_string()))?,
            ),
            None => None,
        };

        let patch = UserPatch {
            username: request.username,
            email: request.email,
            password_hash,
            bio: request.bio,
            image: request.image,
        };

        let user = self.ctx.user_repo().update(user_id, patch).await?;

        info!(user_id = user.id, "user profile updated");

        Ok(UserResponse::from(&user))
    }
}
