//! Profile - a user as seen by another user

/// Public view of a user. `following` is derived per viewer and is always
/// false for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}
