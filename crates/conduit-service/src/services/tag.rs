//! Tag service

use tracing::instrument;

use crate::dto::TagsBody;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    /// Create a new TagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all tag names
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<TagsBody> {
        let tags = self.ctx.tag_repo().list().await?;
        Ok(TagsBody { tags })
    }
}
