//! Test fixtures and data generators
//!
//! Request builders produce the JSON envelopes the API expects; response
//! mirrors deserialize what it returns. Suffixes are derived from the clock
//! so runs never collide with leftover rows.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter so fixtures created within the same nanosecond stay distinct
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{nanos}{count}")
}

// ============================================================================
// Request envelopes
// ============================================================================

/// `{"user":...}` request envelope
#[derive(Debug, Serialize)]
pub struct UserEnvelope<T: Serialize> {
    pub user: T,
}

/// `{"article":...}` request envelope
#[derive(Debug, Serialize)]
pub struct ArticleEnvelope<T: Serialize> {
    pub article: T,
}

/// `{"comment":...}` request envelope
#[derive(Debug, Serialize)]
pub struct CommentEnvelope<T: Serialize> {
    pub comment: T,
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "pw123456".to_string(),
        }
    }

    pub fn envelope(&self) -> UserEnvelope<&Self> {
        UserEnvelope { user: self }
    }

    pub fn login_envelope(&self) -> UserEnvelope<LoginUser> {
        UserEnvelope {
            user: LoginUser {
                email: self.email.clone(),
                password: self.password.clone(),
            },
        }
    }
}

/// Login payload
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Article creation payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateArticle {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(rename = "tagList", skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<String>>,
}

impl CreateArticle {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Article {suffix}"),
            description: "a test article".to_string(),
            body: "body text".to_string(),
            tag_list: None,
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tag_list = Some(tags.iter().map(ToString::to_string).collect());
        self
    }

    pub fn envelope(&self) -> ArticleEnvelope<&Self> {
        ArticleEnvelope { article: self }
    }
}

// ============================================================================
// Response mirrors
// ============================================================================

/// `{"user":...}` response
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub user: UserFields,
}

#[derive(Debug, Deserialize)]
pub struct UserFields {
    pub email: String,
    pub token: Option<String>,
    pub username: String,
    pub bio: String,
    pub image: String,
}

/// `{"profile":...}` response
#[derive(Debug, Deserialize)]
pub struct ProfileBody {
    pub profile: ProfileFields,
}

#[derive(Debug, Deserialize)]
pub struct ProfileFields {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}

/// `{"article":...}` response
#[derive(Debug, Deserialize)]
pub struct ArticleBody {
    pub article: ArticleFields,
}

#[derive(Debug, Deserialize)]
pub struct ArticleFields {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(rename = "tagList")]
    pub tag_list: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub favorited: bool,
    #[serde(rename = "favoritesCount")]
    pub favorites_count: i64,
    pub author: ProfileFields,
}

/// `{"articles":[...],"articlesCount":N}` response
#[derive(Debug, Deserialize)]
pub struct ArticlesBody {
    pub articles: Vec<ArticleFields>,
    #[serde(rename = "articlesCount")]
    pub articles_count: i64,
}

/// `{"comment":...}` response
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub comment: CommentFields,
}

#[derive(Debug, Deserialize)]
pub struct CommentFields {
    pub id: i64,
    pub body: String,
    pub author: ProfileFields,
}

/// `{"comments":[...]}` response
#[derive(Debug, Deserialize)]
pub struct CommentsBody {
    pub comments: Vec<CommentFields>,
}

/// `{"tags":[...]}` response
#[derive(Debug, Deserialize)]
pub struct TagsBody {
    pub tags: Vec<String>,
}

/// `{"errors":{"body":[...]}}` response
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub errors: ErrorMessages,
}

#[derive(Debug, Deserialize)]
pub struct ErrorMessages {
    pub body: Vec<String>,
}
