//! Request DTOs for API endpoints
//!
//! All request bodies arrive wrapped in a JSON envelope; the envelope struct
//! derives `Validate` and delegates to the inner payload with
//! `#[validate(nested)]`. Optional fields distinguish "absent" from
//! "present and empty": a present empty string means "set to empty".

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "password must be 8-72 characters"))]
    pub password: String,
}

/// `POST /api/users` body: `{"user":{...}}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(nested)]
    pub user: RegisterUser,
}

/// Login payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// `POST /api/users/login` body: `{"user":{...}}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(nested)]
    pub user: LoginUser,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "password must be 8-72 characters"))]
    pub password: Option<String>,

    pub bio: Option<String>,

    pub image: Option<String>,
}

/// `PUT /api/user` body: `{"user":{...}}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(nested)]
    pub user: UpdateUser,
}

// ============================================================================
// Article Requests
// ============================================================================

/// Article creation payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticle {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 1024, message = "description must be at most 1024 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,

    /// Tag names in the order they should appear on the article
    #[serde(rename = "tagList")]
    pub tag_list: Option<Vec<String>>,
}

/// `POST /api/articles` body: `{"article":{...}}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(nested)]
    pub article: CreateArticle,
}

/// Partial article update; the slug never changes
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArticle {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1024, message = "description must be at most 1024 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: Option<String>,
}

/// `PUT /api/articles/{slug}` body: `{"article":{...}}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateArticleRequest {
    #[validate(nested)]
    pub article: UpdateArticle,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Comment creation payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, max = 4096, message = "body must be 1-4096 characters"))]
    pub body: String,
}

/// `POST /api/articles/{slug}/comments` body: `{"comment":{...}}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(nested)]
    pub comment: CreateComment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_envelope_deserializes() {
        let json = r#"{"user":{"username":"alice","email":"a@x.io","password":"pw123456"}}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user.username, "alice");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_short_password() {
        let json = r#"{"user":{"username":"alice","email":"a@x.io","password":"short"}}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_rejects_empty_username() {
        let json = r#"{"user":{"username":"","email":"a@x.io","password":"pw123456"}}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_user_distinguishes_absent_from_empty() {
        let absent: UpdateUserRequest = serde_json::from_str(r#"{"user":{}}"#).unwrap();
        assert!(absent.user.bio.is_none());

        let empty: UpdateUserRequest =
            serde_json::from_str(r#"{"user":{"bio":""}}"#).unwrap();
        assert_eq!(empty.user.bio.as_deref(), Some(""));
    }

    #[test]
    fn test_create_article_tag_list_name() {
        let json = r#"{"article":{"title":"t","description":"d","body":"b","tagList":["go","web"]}}"#;
        let req: CreateArticleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.article.tag_list.as_deref(), Some(&["go".to_string(), "web".to_string()][..]));
    }

    #[test]
    fn test_create_article_without_tags() {
        let json = r#"{"article":{"title":"t","description":"d","body":"b"}}"#;
        let req: CreateArticleRequest = serde_json::from_str(json).unwrap();
        assert!(req.article.tag_list.is_none());
        assert!(req.validate().is_ok());
    }
}
