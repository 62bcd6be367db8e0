//! Comment model <-> entity mappers

use conduit_core::entities::{Comment, CommentView, Profile};

use crate::models::{CommentModel, CommentWithAuthorModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            body: model.body,
            article_id: model.article_id,
            author_id: model.author_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentView {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentView {
            comment: Comment {
                id: model.id,
                body: model.body,
                article_id: model.article_id,
                author_id: model.author_id,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            author: Profile {
                username: model.author_username,
                bio: model.author_bio,
                image: model.author_image,
                following: model.following,
            },
        }
    }
}
