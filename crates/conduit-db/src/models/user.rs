//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table. This is the only type that carries
/// the password hash; the mapper strips it before the row becomes a domain
/// entity.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection of a user row plus the viewer-dependent `following` flag
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}
