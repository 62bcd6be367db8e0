//! Error handling utilities for repositories
//!
//! Storage-level failures become domain errors here. Constraint violations
//! are discriminated by constraint *name*; the names are pinned by the
//! migrations and are part of the persistence contract.

use conduit_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Postgres SQLSTATE for a server-side cancelled query
const QUERY_CANCELED: &str = "57014";

/// Convert a SQLx error into a domain error.
///
/// Constraint violations are matched by name; a cancelled statement maps to
/// `Cancelled`; everything else collapses into the opaque `Database` kind.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(QUERY_CANCELED) {
            return DomainError::Cancelled;
        }
        if let Some(domain) = db_err.constraint().and_then(constraint_to_domain) {
            return domain;
        }
    }
    DomainError::Database(e.to_string())
}

/// Translate a named constraint violation into the matching domain error.
///
/// Returns `None` for constraints the taxonomy has no opinion about (those
/// fall through to `Database`).
fn constraint_to_domain(constraint: &str) -> Option<DomainError> {
    match constraint {
        "users_username_key" => Some(DomainError::DuplicateUsername),
        "users_email_key" => Some(DomainError::DuplicateEmail),
        "articles_slug_key" => Some(DomainError::DuplicateSlug),
        "prevent_self_follow" => Some(DomainError::CannotFollowSelf),
        "articles_author_id_fkey"
        | "comments_author_id_fkey"
        | "favorites_user_id_fkey"
        | "follows_follower_id_fkey"
        | "follows_following_id_fkey" => Some(DomainError::UserNotFound),
        "article_tags_article_id_fkey"
        | "favorites_article_id_fkey"
        | "comments_article_id_fkey" => Some(DomainError::ArticleNotFound),
        _ => None,
    }
}
