//! Response DTOs for API endpoints
//!
//! Payloads are wrapped in their JSON envelope (`{"user":...}`, `{"article":...}`,
//! ...) and use camelCase field names. Timestamps serialize as RFC 3339 with
//! millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Serialize a timestamp as RFC 3339 with milliseconds and a Z suffix
pub fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// ============================================================================
// User Responses
// ============================================================================

/// The authenticated user. The token is present only when it was just
/// issued (registration and login); other endpoints return the user alone.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub username: String,
    pub bio: String,
    pub image: String,
}

/// `{"user":...}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct UserBody {
    pub user: UserResponse,
}

impl UserBody {
    pub fn new(user: UserResponse) -> Self {
        Self { user }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// A user as seen by the viewer
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}

/// `{"profile":...}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct ProfileBody {
    pub profile: ProfileResponse,
}

impl ProfileBody {
    pub fn new(profile: ProfileResponse) -> Self {
        Self { profile }
    }
}

// ============================================================================
// Article Responses
// ============================================================================

/// Hydrated article view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_datetime")]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileResponse,
}

/// `{"article":...}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct ArticleBody {
    pub article: ArticleResponse,
}

impl ArticleBody {
    pub fn new(article: ArticleResponse) -> Self {
        Self { article }
    }
}

/// `{"articles":[...],"articlesCount":N}` envelope. The count is the total
/// number of matching articles, not the page size.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesBody {
    pub articles: Vec<ArticleResponse>,
    pub articles_count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A comment with its author's profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_datetime")]
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: ProfileResponse,
}

/// `{"comment":...}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct CommentBody {
    pub comment: CommentResponse,
}

impl CommentBody {
    pub fn new(comment: CommentResponse) -> Self {
        Self { comment }
    }
}

/// `{"comments":[...]}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct CommentsBody {
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Tag Responses
// ============================================================================

/// `{"tags":[...]}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct TagsBody {
    pub tags: Vec<String>,
}
