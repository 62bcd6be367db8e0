//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use conduit_core::entities::{ArticleView, CommentView, Profile, User};

use super::responses::{ArticleResponse, CommentResponse, ProfileResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl UserResponse {
    /// Response for endpoints that just issued a token (register, login)
    pub fn with_token(user: &User, token: String) -> Self {
        Self {
            email: user.email.clone(),
            token: Some(token),
            username: user.username.clone(),
            bio: user.bio.clone(),
            image: user.image.clone(),
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            token: None,
            username: user.username.clone(),
            bio: user.bio.clone(),
            image: user.image.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            bio: profile.bio.clone(),
            image: profile.image.clone(),
            following: profile.following,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// Article Mappers
// ============================================================================

impl From<ArticleView> for ArticleResponse {
    fn from(view: ArticleView) -> Self {
        Self {
            slug: view.article.slug,
            title: view.article.title,
            description: view.article.description,
            body: view.article.body,
            tag_list: view.tag_list,
            created_at: view.article.created_at,
            updated_at: view.article.updated_at,
            favorited: view.favorited,
            favorites_count: view.favorites_count,
            author: view.author.into(),
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment.id,
            created_at: view.comment.created_at,
            updated_at: view.comment.updated_at,
            body: view.comment.body,
            author: view.author.into(),
        }
    }
}
