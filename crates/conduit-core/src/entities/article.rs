//! Article entity - a published piece of writing

use chrono::{DateTime, Utc};

use super::Profile;

/// Article as stored. The slug is derived from the title at creation time
/// and stays stable for the lifetime of the article, even across title edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Check whether the given user wrote this article
    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

/// Article enriched with the derived scalars a response needs: the author's
/// profile, the tag list in link order, the favorites count, and whether the
/// viewer has favorited it. None of these are stored on the article row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub article: Article,
    pub author: Profile,
    pub tag_list: Vec<String>,
    pub favorited: bool,
    pub favorites_count: i64,
}
