//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation, shaped as the JSON envelopes the API
//!   speaks (`{"user":...}`, `{"article":...}`, `{"comment":...}`)
//! - Response DTOs with the matching envelopes and camelCase field names
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateArticle, CreateArticleRequest, CreateComment, CreateCommentRequest, LoginRequest,
    LoginUser, RegisterRequest, RegisterUser, UpdateArticle, UpdateArticleRequest, UpdateUser,
    UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ArticleBody, ArticleResponse, ArticlesBody, CommentBody, CommentResponse, CommentsBody,
    ProfileBody, ProfileResponse, TagsBody, UserBody, UserResponse,
};
