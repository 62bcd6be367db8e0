//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub body: String,
    pub article_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment row joined with its author's profile columns
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    pub id: i64,
    pub body: String,
    pub article_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_bio: String,
    pub author_image: String,
    pub following: bool,
}
