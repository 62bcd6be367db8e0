//! # conduit-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types
pub use dto::{
    ArticleBody, ArticleResponse, ArticlesBody, CommentBody, CommentResponse, CommentsBody,
    CreateArticle, CreateArticleRequest, CreateComment, CreateCommentRequest, LoginRequest,
    LoginUser, ProfileBody, ProfileResponse, RegisterRequest, RegisterUser, TagsBody,
    UpdateArticle, UpdateArticleRequest, UpdateUser, UpdateUserRequest, UserBody, UserResponse,
};
pub use services::{
    ArticleService, CommentService, ProfileService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TagService, UserService,
};
