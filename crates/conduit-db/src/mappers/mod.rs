//! Model to entity mappers
//!
//! Conversions from database rows (this crate's models) to domain entities
//! (conduit-core). The password hash is dropped at this boundary and never
//! reaches a domain object.

mod article;
mod comment;
mod user;
