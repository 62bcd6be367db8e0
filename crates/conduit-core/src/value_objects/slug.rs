//! Slug - URL-safe identifier derived from an article title
//!
//! Derivation is deterministic: the same title always produces the same
//! slug, and the slug never changes after creation. Uniqueness across
//! articles is enforced by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// URL-safe, lowercase, hyphen-separated form of an article title
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from an article title
    pub fn from_title(title: &str) -> Self {
        Self(slug::slugify(title))
    }

    /// Wrap an already-derived slug (e.g. read back from the store)
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the slug as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the slug and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// A slug is empty when the title contained no sluggable characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
