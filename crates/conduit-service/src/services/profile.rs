//! Profile service
//!
//! Public profiles and the follow/unfollow edges between users.

use conduit_core::DomainError;
use tracing::{info, instrument};

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a profile as seen by the viewer
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        username: &str,
        viewer_id: Option<i64>,
    ) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .follow_repo()
            .profile_by_username(username, viewer_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound))?;

        Ok(profile.into())
    }

    /// Follow a user. Idempotent; self-follows are rejected by the schema
    /// CHECK constraint and surface as `CannotFollowSelf`.
    #[instrument(skip(self))]
    pub async fn follow(&self, follower_id: i64, username: &str) -> ServiceResult<ProfileResponse> {
        let target = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound))?;

        self.ctx.follow_repo().follow(follower_id, target.id).await?;

        info!(follower_id, following_id = target.id, "follow edge created");

        Ok(target.profile(true).into())
    }

    /// Unfollow a user. A no-op when there was no follow edge.
    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        follower_id: i64,
        username: &str,
    ) -> ServiceResult<ProfileResponse> {
        let target = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound))?;

        self.ctx.follow_repo().unfollow(follower_id, target.id).await?;

        info!(follower_id, following_id = target.id, "follow edge removed");

        Ok(target.profile(false).into())
    }
}
