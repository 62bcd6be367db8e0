//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use conduit_api::{create_app, create_app_state};
use conduit_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Signing secret used when JWT_SECRET is not set in the environment
pub const TEST_JWT_SECRET: &str = "integration-test-secret-key-0123456789";

/// Check whether the test environment is available; tests politely no-op
/// without a database.
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").is_ok()
}

/// The signing secret the test server is configured with
pub fn test_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| TEST_JWT_SECRET.to_string())
}

/// Build a config for a test server on an ephemeral port
pub fn test_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow!("DATABASE_URL is not set"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "conduit-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: test_jwt_secret(),
            ttl_seconds: 3600,
        },
        cors: CorsConfig::default(),
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state (connects to the database, runs migrations)
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: Client::new(),
            _handle: handle,
        })
    }

    /// Full URL for a path
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET without authentication
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// GET with a `Token` authorization header
    pub async fn get_with_token(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Token {token}"))
            .send()
            .await?)
    }

    /// POST a JSON body without authentication
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// POST a JSON body with a `Token` authorization header
    pub async fn post_with_token<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Token {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// POST with no body (follow, favorite)
    pub async fn post_empty_with_token(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Token {token}"))
            .send()
            .await?)
    }

    /// PUT a JSON body with a `Token` authorization header
    pub async fn put_with_token<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .header("Authorization", format!("Token {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// DELETE with a `Token` authorization header
    pub async fn delete_with_token(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .header("Authorization", format!("Token {token}"))
            .send()
            .await?)
    }
}

/// Assert a response status, consuming the response
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!("expected {expected}, got {status}: {body}"));
    }
    Ok(())
}

/// Assert a response status and deserialize its JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status != expected {
        return Err(anyhow!("expected {expected}, got {status}: {body}"));
    }
    Ok(serde_json::from_str(&body)
        .map_err(|e| anyhow!("failed to decode response body: {e}: {body}"))?)
}
