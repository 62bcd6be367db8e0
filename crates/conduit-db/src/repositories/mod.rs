//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! conduit-core. Each repository handles database operations for one
//! aggregate; multi-row writes run inside a single transaction.

mod article;
mod comment;
mod error;
mod follow;
mod tag;
mod user;

pub use article::PgArticleRepository;
pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
