//! Domain errors - the closed error taxonomy raised by the core
//!
//! The persistence layer translates storage-level constraint violations into
//! these variants; the service layer adds the authorization and business-rule
//! kinds. Nothing outside this enum crosses a layer boundary.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("user not found")]
    UserNotFound,

    #[error("article not found")]
    ArticleNotFound,

    #[error("comment not found")]
    CommentNotFound,

    // =========================================================================
    // Conflict Errors (constraint-translated)
    // =========================================================================
    #[error("username is already taken")]
    DuplicateUsername,

    #[error("email is already registered")]
    DuplicateEmail,

    #[error("an article with this slug already exists")]
    DuplicateSlug,

    // =========================================================================
    // Authorization / Business Rule Violations
    // =========================================================================
    #[error("not authorized to modify this resource")]
    NotAuthorized,

    #[error("authors cannot favorite their own article")]
    AuthorCannotFavorite,

    #[error("users cannot follow themselves")]
    CannotFollowSelf,

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("operation was cancelled")]
    Cancelled,

    #[error("database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::DuplicateUsername => "USERNAME_TAKEN",
            Self::DuplicateEmail => "EMAIL_TAKEN",
            Self::DuplicateSlug => "ARTICLE_ALREADY_EXISTS",
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::AuthorCannotFavorite => "AUTHOR_CANNOT_FAVORITE",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::Cancelled => "CANCELLED",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound | Self::ArticleNotFound | Self::CommentNotFound
        )
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUsername | Self::DuplicateEmail | Self::DuplicateSlug
        )
    }

    /// Check if this is an authorization or business-rule error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAuthorized | Self::AuthorCannotFavorite | Self::CannotFollowSelf
        )
    }
}
