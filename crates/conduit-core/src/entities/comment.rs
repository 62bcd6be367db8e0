//! Comment entity - a remark attached to an article

use chrono::{DateTime, Utc};

use super::Profile;

/// Comment on an article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub article_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Check whether the given user wrote this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

/// Comment enriched with the author's profile for a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author: Profile,
}
