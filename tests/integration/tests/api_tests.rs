//! API integration tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! DATABASE_URL; migrations are applied on server start. Without a database
//! the tests no-op.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use conduit_common::TokenService;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_jwt_secret, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user and return the fixture plus the issued token
async fn register(server: &TestServer) -> (RegisterUser, String) {
    let fixture = RegisterUser::unique();
    let response = server.post("/api/users", &fixture.envelope()).await.unwrap();
    let body: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    (fixture, body.user.token.expect("register issues a token"))
}

/// Create an article for the given token and return its slug
async fn create_article(server: &TestServer, token: &str, article: &CreateArticle) -> String {
    let response = server
        .post_with_token("/api/articles", &article.envelope(), token)
        .await
        .unwrap();
    let body: ArticleBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.article.slug
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// S1: Register + Login
// ============================================================================

#[tokio::test]
async fn test_register_and_login_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let fixture = RegisterUser::unique();

    // Register: 201 with a token
    let response = server.post("/api/users", &fixture.envelope()).await.unwrap();
    let registered: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.user.username, fixture.username);
    assert_eq!(registered.user.email, fixture.email);
    assert!(registered.user.bio.is_empty());
    let token1 = registered.user.token.expect("register issues a token");

    // Login: 200 with a fresh token
    let response = server
        .post("/api/users/login", &fixture.login_envelope())
        .await
        .unwrap();
    let logged_in: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    let token2 = logged_in.user.token.expect("login issues a token");

    // Both tokens verify against the configured secret with the same subject
    let verifier = TokenService::new(&test_jwt_secret(), 3600);
    let claims1 = verifier.verify(&token1).expect("register token verifies");
    let claims2 = verifier.verify(&token2).expect("login token verifies");
    assert_eq!(claims1.sub, claims2.sub);
    assert_ne!(claims1.jti, claims2.jti);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (fixture, _token) = register(&server).await;

    let wrong = UserEnvelope {
        user: LoginUser {
            email: fixture.email.clone(),
            password: "pw654321".to_string(),
        },
    };
    let response = server.post("/api/users/login", &wrong).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Unknown email is indistinguishable from a wrong password
    let unknown = UserEnvelope {
        user: LoginUser {
            email: format!("nobody{}@example.com", unique_suffix()),
            password: "pw123456".to_string(),
        },
    };
    let response = server.post("/api/users/login", &unknown).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// S2: Duplicate username
// ============================================================================

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (fixture, _token) = register(&server).await;

    // Same username, different email
    let duplicate = UserEnvelope {
        user: RegisterUser {
            username: fixture.username.clone(),
            email: format!("other{}@example.com", unique_suffix()),
            password: "pw123456".to_string(),
        },
    };
    let response = server.post("/api/users", &duplicate).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(!error.errors.body.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (fixture, _token) = register(&server).await;

    let duplicate = UserEnvelope {
        user: RegisterUser {
            username: format!("other{}", unique_suffix()),
            email: fixture.email.clone(),
            password: "pw123456".to_string(),
        },
    };
    let response = server.post("/api/users", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_validation_failure() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");

    let invalid = UserEnvelope {
        user: RegisterUser {
            username: format!("short{}", unique_suffix()),
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        },
    };
    let response = server.post("/api/users", &invalid).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(!error.errors.body.is_empty());
}

// ============================================================================
// Current user
// ============================================================================

#[tokio::test]
async fn test_current_user_and_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (fixture, token) = register(&server).await;

    // GET /api/user returns the user without a fresh token
    let response = server.get_with_token("/api/user", &token).await.unwrap();
    let current: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current.user.username, fixture.username);
    assert!(current.user.token.is_none());

    // Partial update: bio only, username untouched
    let update = serde_json::json!({"user": {"bio": "rust all the way down"}});
    let response = server.put_with_token("/api/user", &update, &token).await.unwrap();
    let updated: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.user.bio, "rust all the way down");
    assert_eq!(updated.user.username, fixture.username);

    // A present empty string clears the field
    let clear = serde_json::json!({"user": {"bio": ""}});
    let response = server.put_with_token("/api/user", &clear, &token).await.unwrap();
    let cleared: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(cleared.user.bio.is_empty());

    // Without a token the endpoint is 401
    let response = server.get("/api/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// S3: Article lifecycle
// ============================================================================

#[tokio::test]
async fn test_article_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_alice, alice_token) = register(&server).await;
    let (_bob, bob_token) = register(&server).await;

    // Alice publishes with two tags
    let article = CreateArticle::unique().with_tags(&["go", "web"]);
    let response = server
        .post_with_token("/api/articles", &article.envelope(), &alice_token)
        .await
        .unwrap();
    let created: ArticleBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let slug = created.article.slug.clone();
    assert_eq!(created.article.tag_list, vec!["go", "web"]);
    assert!(!created.article.favorited);
    assert_eq!(created.article.favorites_count, 0);

    // Anonymous fetch
    let response = server.get(&format!("/api/articles/{slug}")).await.unwrap();
    let fetched: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.article.tag_list, vec!["go", "web"]);
    assert!(!fetched.article.favorited);
    assert_eq!(fetched.article.favorites_count, 0);
    assert!(!fetched.article.author.following);

    // Bob favorites; doing it twice leaves the count at 1
    let response = server
        .post_empty_with_token(&format!("/api/articles/{slug}/favorite"), &bob_token)
        .await
        .unwrap();
    let favorited: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorited.article.favorited);
    assert_eq!(favorited.article.favorites_count, 1);

    let response = server
        .post_empty_with_token(&format!("/api/articles/{slug}/favorite"), &bob_token)
        .await
        .unwrap();
    let again: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(again.article.favorites_count, 1);

    // Bob sees it as favorited
    let response = server
        .get_with_token(&format!("/api/articles/{slug}"), &bob_token)
        .await
        .unwrap();
    let as_bob: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(as_bob.article.favorited);

    // Unfavorite is idempotent too
    let response = server
        .delete_with_token(&format!("/api/articles/{slug}/favorite"), &bob_token)
        .await
        .unwrap();
    let unfavorited: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unfavorited.article.favorited);
    assert_eq!(unfavorited.article.favorites_count, 0);

    let response = server
        .delete_with_token(&format!("/api/articles/{slug}/favorite"), &bob_token)
        .await
        .unwrap();
    let still: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(still.article.favorites_count, 0);
}

#[tokio::test]
async fn test_article_update_keeps_slug_and_authorization() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_alice, alice_token) = register(&server).await;
    let (_bob, bob_token) = register(&server).await;

    let slug = create_article(&server, &alice_token, &CreateArticle::unique()).await;

    // Title change does not regenerate the slug
    let update = serde_json::json!({"article": {"title": "A Brand New Title"}});
    let response = server
        .put_with_token(&format!("/api/articles/{slug}"), &update, &alice_token)
        .await
        .unwrap();
    let updated: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.article.title, "A Brand New Title");
    assert_eq!(updated.article.slug, slug);

    // Non-author update is forbidden
    let response = server
        .put_with_token(&format!("/api/articles/{slug}"), &update, &bob_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Non-author delete is forbidden; the author may delete
    let response = server
        .delete_with_token(&format!("/api/articles/{slug}"), &bob_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_with_token(&format!("/api/articles/{slug}"), &alice_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone now
    let response = server.get(&format!("/api/articles/{slug}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_article_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let article = CreateArticle::unique();
    let response = server.post("/api/articles", &article.envelope()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// S4: Self-follow
// ============================================================================

#[tokio::test]
async fn test_self_follow_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (alice, alice_token) = register(&server).await;

    let response = server
        .post_empty_with_token(
            &format!("/api/profiles/{}/follow", alice.username),
            &alice_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_follow_unfollow_idempotence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_alice, alice_token) = register(&server).await;
    let (bob, _bob_token) = register(&server).await;

    // Follow twice; both succeed and the profile reads following=true
    for _ in 0..2 {
        let response = server
            .post_empty_with_token(&format!("/api/profiles/{}/follow", bob.username), &alice_token)
            .await
            .unwrap();
        let profile: ProfileBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(profile.profile.following);
    }

    let response = server
        .get_with_token(&format!("/api/profiles/{}", bob.username), &alice_token)
        .await
        .unwrap();
    let profile: ProfileBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.profile.following);

    // Anonymous viewers never see following=true
    let response = server.get(&format!("/api/profiles/{}", bob.username)).await.unwrap();
    let profile: ProfileBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!profile.profile.following);

    // Unfollow twice; both succeed and the edge stays gone
    for _ in 0..2 {
        let response = server
            .delete_with_token(&format!("/api/profiles/{}/follow", bob.username), &alice_token)
            .await
            .unwrap();
        let profile: ProfileBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(!profile.profile.following);
    }
}

// ============================================================================
// S5: Author cannot favorite
// ============================================================================

#[tokio::test]
async fn test_author_cannot_favorite_own_article() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_alice, alice_token) = register(&server).await;

    let slug = create_article(&server, &alice_token, &CreateArticle::unique()).await;

    let response = server
        .post_empty_with_token(&format!("/api/articles/{slug}/favorite"), &alice_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The count is untouched
    let response = server.get(&format!("/api/articles/{slug}")).await.unwrap();
    let article: ArticleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(article.article.favorites_count, 0);
}

// ============================================================================
// S6: Comment ownership
// ============================================================================

#[tokio::test]
async fn test_comment_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_alice, alice_token) = register(&server).await;
    let (bob, bob_token) = register(&server).await;

    let slug = create_article(&server, &alice_token, &CreateArticle::unique()).await;

    // Bob comments
    let comment = CommentEnvelope {
        comment: serde_json::json!({"body": "well said"}),
    };
    let response = server
        .post_with_token(&format!("/api/articles/{slug}/comments"), &comment, &bob_token)
        .await
        .unwrap();
    let created: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.comment.body, "well said");
    assert_eq!(created.comment.author.username, bob.username);
    let comment_id = created.comment.id;

    // Alice may not delete Bob's comment, even on her own article
    let response = server
        .delete_with_token(
            &format!("/api/articles/{slug}/comments/{comment_id}"),
            &alice_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Bob may
    let response = server
        .delete_with_token(
            &format!("/api/articles/{slug}/comments/{comment_id}"),
            &bob_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // And it is gone
    let response = server
        .get(&format!("/api/articles/{slug}/comments"))
        .await
        .unwrap();
    let listed: CommentsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.comments.iter().all(|c| c.id != comment_id));
}

#[tokio::test]
async fn test_comments_list_in_creation_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_alice, alice_token) = register(&server).await;

    let slug = create_article(&server, &alice_token, &CreateArticle::unique()).await;

    for body in ["first", "second", "third"] {
        let comment = CommentEnvelope {
            comment: serde_json::json!({"body": body}),
        };
        let response = server
            .post_with_token(&format!("/api/articles/{slug}/comments"), &comment, &alice_token)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/articles/{slug}/comments"))
        .await
        .unwrap();
    let listed: CommentsBody = assert_json(response, StatusCode::OK).await.unwrap();
    let bodies: Vec<&str> = listed.comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

// ============================================================================
// Listing, feed, and tags
// ============================================================================

#[tokio::test]
async fn test_article_listing_with_filters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (alice, alice_token) = register(&server).await;

    let tag = format!("filter-{}", unique_suffix());
    for _ in 0..2 {
        let article = CreateArticle::unique().with_tags(&[tag.as_str()]);
        create_article(&server, &alice_token, &article).await;
    }

    // Filter by tag
    let response = server.get(&format!("/api/articles?tag={tag}")).await.unwrap();
    let by_tag: ArticlesBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_tag.articles_count, 2);
    assert!(by_tag.articles.iter().all(|a| a.tag_list.contains(&tag)));

    // Newest first
    assert!(by_tag.articles[0].created_at >= by_tag.articles[1].created_at);

    // Filter by author with pagination: total stays at 2
    let response = server
        .get(&format!("/api/articles?author={}&limit=1", alice.username))
        .await
        .unwrap();
    let by_author: ArticlesBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_author.articles_count, 2);
    assert_eq!(by_author.articles.len(), 1);

    // The tag is now listed globally
    let response = server.get("/api/tags").await.unwrap();
    let tags: TagsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(tags.tags.contains(&tag));
}

#[tokio::test]
async fn test_feed_contains_only_followed_authors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");
    let (_reader, reader_token) = register(&server).await;
    let (followed, followed_token) = register(&server).await;
    let (_stranger, stranger_token) = register(&server).await;

    let followed_slug = create_article(&server, &followed_token, &CreateArticle::unique()).await;
    let _stranger_slug = create_article(&server, &stranger_token, &CreateArticle::unique()).await;

    let response = server
        .post_empty_with_token(
            &format!("/api/profiles/{}/follow", followed.username),
            &reader_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_with_token("/api/articles/feed", &reader_token)
        .await
        .unwrap();
    let feed: ArticlesBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.articles_count, 1);
    assert_eq!(feed.articles[0].slug, followed_slug);
    assert!(feed.articles[0].author.following);

    // The feed requires authentication
    let response = server.get("/api/articles/feed").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Token handling
// ============================================================================

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("failed to start server");

    let response = server.get_with_token("/api/user", "not.a.token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // A broken token on an optional-auth endpoint is still an error
    let (_alice, alice_token) = register(&server).await;
    let slug = create_article(&server, &alice_token, &CreateArticle::unique()).await;
    let response = server
        .get_with_token(&format!("/api/articles/{slug}"), "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
