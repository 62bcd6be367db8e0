//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the persistence layer provides
//! the implementation. Every method that writes more than one row does so in
//! a single transaction on the implementation side.

use async_trait::async_trait;

use crate::entities::{Article, ArticleView, Comment, CommentView, Profile, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A page of results together with the total count of matching rows
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

// ============================================================================
// User Repository
// ============================================================================

/// Data for inserting a new user row
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Partial update of a user. `None` fields are left untouched; a present
/// empty string overwrites with empty (there are no sentinel values).
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserPatch {
    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row.
    /// Unique violations surface as `DuplicateUsername` / `DuplicateEmail`.
    async fn create(&self, new_user: NewUser<'_>) -> RepoResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Get password hash for authentication. Only the domain layer may read
    /// this; the hash never appears on the `User` entity.
    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Apply a partial update and return the stored row.
    /// Missing user surfaces as `UserNotFound`.
    async fn update(&self, id: i64, patch: UserPatch) -> RepoResult<User>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// Data for inserting a new article with its tag links
#[derive(Debug, Clone)]
pub struct NewArticle<'a> {
    pub author_id: i64,
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub body: &'a str,
    /// Tag names in the order they should be linked (and later listed)
    pub tags: &'a [String],
}

/// Partial update of an article. The slug is never part of a patch: it is
/// pinned at creation.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

/// Filters for the article listing
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Only articles carrying this tag
    pub tag: Option<String>,
    /// Only articles written by this username
    pub author: Option<String>,
    /// Only articles favorited by this username
    pub favorited_by: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert the article row, upsert each tag, and link the tags in input
    /// order - all within one transaction. Slug collision surfaces as
    /// `DuplicateSlug`; a missing author as `UserNotFound`.
    async fn create(&self, new_article: NewArticle<'_>) -> RepoResult<Article>;

    /// Find the bare article row by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Article>>;

    /// Load the hydrated view of an article: author profile, tag list in
    /// link order, favorites count, and the viewer-dependent flags
    /// (`favorited`, `author.following` - both false without a viewer).
    async fn view_by_slug(&self, slug: &str, viewer_id: Option<i64>)
        -> RepoResult<Option<ArticleView>>;

    /// Apply a partial update (coalesce semantics) and refresh `updated_at`.
    async fn update(&self, id: i64, patch: ArticlePatch) -> RepoResult<()>;

    /// Delete the article; the schema cascades to tag links, favorites, and
    /// comments.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Record a favorite. Idempotent: repeating the same (user, article)
    /// pair is a no-op.
    async fn add_favorite(&self, user_id: i64, article_id: i64) -> RepoResult<()>;

    /// Remove a favorite. Idempotent: absent rows are a no-op.
    async fn remove_favorite(&self, user_id: i64, article_id: i64) -> RepoResult<()>;

    /// List articles matching the filter, newest first (`created_at DESC`,
    /// `id DESC` tiebreak), with the total matching count.
    async fn list(&self, filter: &ArticleFilter, viewer_id: Option<i64>)
        -> RepoResult<Page<ArticleView>>;

    /// List articles authored by users the given user follows, same
    /// ordering and pagination as `list`.
    async fn feed(&self, user_id: i64, limit: i64, offset: i64) -> RepoResult<Page<ArticleView>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Data for inserting a new comment
#[derive(Debug, Clone)]
pub struct NewComment<'a> {
    pub article_id: i64,
    pub author_id: i64,
    pub body: &'a str,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment and return the stored row
    async fn create(&self, new_comment: NewComment<'_>) -> RepoResult<Comment>;

    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// Delete a comment. Missing comment surfaces as `CommentNotFound`.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// List the comments of an article in `created_at ASC` order, each with
    /// its author's profile resolved against the viewer.
    async fn list_for_article(
        &self,
        article_id: i64,
        viewer_id: Option<i64>,
    ) -> RepoResult<Vec<CommentView>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert a follow edge. Idempotent; a self-follow is rejected by the
    /// schema and surfaces as `CannotFollowSelf`.
    async fn follow(&self, follower_id: i64, following_id: i64) -> RepoResult<()>;

    /// Remove a follow edge. Idempotent.
    async fn unfollow(&self, follower_id: i64, following_id: i64) -> RepoResult<()>;

    /// Check whether the follow edge exists
    async fn is_following(&self, follower_id: i64, following_id: i64) -> RepoResult<bool>;

    /// Resolve a username into the target's profile as seen by the viewer
    async fn profile_by_username(
        &self,
        username: &str,
        viewer_id: Option<i64>,
    ) -> RepoResult<Option<Profile>>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List all tag names
    async fn list(&self) -> RepoResult<Vec<String>>;
}
