//! Tag entity - a shared label attached to articles

/// Tag. Created on demand the first time an article references the name,
/// shared between articles, never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
