//! Route definitions
//!
//! All API routes mounted under /api; health probes live outside it.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{articles, comments, health, profiles, tags, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass the API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// /api routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(profile_routes())
        .merge(article_routes())
        .merge(tag_routes())
}

/// User and authentication routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/login", post(users::login))
        .route("/user", get(users::current_user))
        .route("/user", put(users::update_user))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/:username", get(profiles::get_profile))
        .route("/profiles/:username/follow", post(profiles::follow))
        .route("/profiles/:username/follow", delete(profiles::unfollow))
}

/// Article and comment routes
fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(articles::list_articles))
        .route("/articles", post(articles::create_article))
        .route("/articles/feed", get(articles::feed))
        .route("/articles/:slug", get(articles::get_article))
        .route("/articles/:slug", put(articles::update_article))
        .route("/articles/:slug", delete(articles::delete_article))
        .route("/articles/:slug/favorite", post(articles::favorite_article))
        .route("/articles/:slug/favorite", delete(articles::unfavorite_article))
        .route("/articles/:slug/comments", post(comments::create_comment))
        .route("/articles/:slug/comments", get(comments::list_comments))
        .route("/articles/:slug/comments/:id", delete(comments::delete_comment))
}

/// Tag routes
fn tag_routes() -> Router<AppState> {
    Router::new().route("/tags", get(tags::list_tags))
}
