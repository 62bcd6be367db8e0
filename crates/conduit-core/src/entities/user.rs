//! User entity - a registered account

use chrono::{DateTime, Utc};

/// User account. The password hash is deliberately absent: it lives in the
/// persistence layer and never crosses into the domain object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Free-form biography; empty string means "not set".
    pub bio: String,
    /// Avatar URL; empty string means "not set".
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user has filled in a biography
    #[inline]
    pub fn has_bio(&self) -> bool {
        !self.bio.is_empty()
    }

    /// Check if the user has an avatar image
    #[inline]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Public profile of this user, as seen by a viewer
    pub fn profile(&self, following: bool) -> super::Profile {
        super::Profile {
            username: self.username.clone(),
            bio: self.bio.clone(),
            image: self.image.clone(),
            following,
        }
    }
}
