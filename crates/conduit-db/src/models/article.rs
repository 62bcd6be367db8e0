//! Article database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the articles table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat hydration row: the article joined with its author and the derived
/// scalars computed in SQL. `favorited` and `following` come out false when
/// the bound viewer id is NULL.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleViewModel {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_bio: String,
    pub author_image: String,
    pub favorites_count: i64,
    pub favorited: bool,
    pub following: bool,
}

/// One tag link of an article, in list order
#[derive(Debug, Clone, FromRow)]
pub struct ArticleTagRow {
    pub article_id: i64,
    pub name: String,
}
