//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, seeding users and
//! making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_app_state, AppState};
use blog_common::AppConfig;
use blog_core::entities::User;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// A user that exists in the database, with a valid access token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub login: String,
    pub token: String,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
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
        let state = create_app_state(config).await?;
        let app = create_app(state.clone());

        // Port 0 lets the OS pick
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url(), path)
    }

    /// Insert a fresh user directly and issue them a token
    ///
    /// Registration and login are owned by another service, so tests seed
    /// through the repository.
    pub async fn seed_user(&self) -> Result<TestUser> {
        let ctx = self.state.service_context();
        let suffix = unique_suffix();
        let id = ctx.generate_id();
        let user = User::new(
            id,
            format!("it{suffix}"),
            format!("it_{}@example.com", id),
        );
        ctx.user_repo().create(&user).await?;
        let token = ctx.jwt_service().issue_access_token(id)?;

        Ok(TestUser {
            id: id.to_string(),
            login: user.login,
            token,
        })
    }

    /// GET a path outside /api/v1
    pub async fn get_raw(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request without auth
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// Only DATABASE_URL is required; the rest falls back to test values.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| {
        std::env::var(key).ok().or_else(|| {
            match key {
                "API_PORT" => Some("0"),
                "JWT_SECRET" => Some("integration-test-secret-key"),
                "DATABASE_RUN_MIGRATIONS" => Some("true"),
                "DATABASE_MAX_CONNECTIONS" => Some("5"),
                "DATABASE_MIN_CONNECTIONS" => Some("1"),
                "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1000"),
                "RATE_LIMIT_BURST" => Some("1000"),
                _ => None,
            }
            .map(String::from)
        })
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
