//! User model <-> entity mapper

use conduit_core::entities::{Profile, User};

use crate::models::{ProfileModel, UserModel};

/// Convert a user row into the domain entity, dropping the password hash
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            bio: model.bio,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            username: model.username,
            bio: model.bio,
            image: model.image,
            following: model.following,
        }
    }
}
