//! # conduit-db
//!
//! Persistence layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `conduit-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - Translation of constraint violations into the domain error taxonomy
//!
//! Constraint *names* carry meaning here: the migrations pin them and
//! `repositories::error` matches on them to produce precise domain errors.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgArticleRepository, PgCommentRepository, PgFollowRepository, PgTagRepository,
    PgUserRepository,
};

/// Embedded migrations, applied at startup by the server binary
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
