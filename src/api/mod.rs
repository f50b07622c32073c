//! Random user API client
//!
//! One read-only endpoint:
//! `GET {api_url}?page={page}&limit={count}` returning
//! `{ "data": { "data": [UserRecord, ...] } }`.
//!
//! The `UserSource` trait is the seam the TUI fetches through, so the UI
//! state machine can be driven without a network in tests.

use crate::config::Config;
use crate::users::{RequestCount, UserRecord};
use futures::future::{BoxFuture, FutureExt};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Public endpoint used when no override is configured
pub const DEFAULT_API_URL: &str = "https://api.freeapi.app/api/v1/public/randomusers";

// ═══════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════

/// Errors that end a fetch cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    Transport(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body was not the expected envelope of user records
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Failed to fetch: {}", msg),
            // Status code is logged, not shown
            Self::Status(_) => write!(f, "Network response was not ok"),
            Self::Malformed(msg) => write!(f, "Unexpected response format: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // Include the source chain: reqwest's top-level message is often just
        // "error sending request"
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(msg)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Source Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Anything that can produce `count` user records
pub trait UserSource: Send + Sync {
    fn fetch(&self, count: RequestCount) -> BoxFuture<'static, Result<Vec<UserRecord>, FetchError>>;
}

// ═══════════════════════════════════════════════════════════════════════════
// HTTP Client
// ═══════════════════════════════════════════════════════════════════════════

/// API response envelope; only the nested record list is kept
#[derive(Debug, Deserialize)]
struct RandomUsersResponse {
    data: RandomUsersPage,
}

#[derive(Debug, Deserialize)]
struct RandomUsersPage {
    data: Vec<UserRecord>,
}

/// Decode a response body into user records
pub fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_slice::<RandomUsersResponse>(body)
        .map(|response| response.data.data)
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

/// reqwest-backed client for the random user endpoint
///
/// Cheap to clone: `reqwest::Client` is reference counted internally.
#[derive(Debug, Clone)]
pub struct RandomUsersClient {
    client: reqwest::Client,
    base_url: String,
    page: u32,
}

impl RandomUsersClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("randusers/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(
            "Initialized random user client: {} (page {}, timeout {}s)",
            config.api_url,
            config.page,
            config.request_timeout_secs
        );

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            page: config.page,
        })
    }

    /// Full request URL for `count` users
    pub fn request_url(&self, count: RequestCount) -> String {
        format!("{}?page={}&limit={}", self.base_url, self.page, count)
    }

    /// Issue exactly one GET for `count` users
    pub async fn fetch_users(&self, count: RequestCount) -> Result<Vec<UserRecord>, FetchError> {
        let url = self.request_url(count);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!("Random user API returned {} for {}", status, url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let users = parse_users(&body)?;

        tracing::info!("Fetched {} users (requested {})", users.len(), count);
        Ok(users)
    }
}

impl UserSource for RandomUsersClient {
    fn fetch(&self, count: RequestCount) -> BoxFuture<'static, Result<Vec<UserRecord>, FetchError>> {
        let client = self.clone();
        async move { client.fetch_users(count).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::fixtures;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// Serve `router` on an ephemeral port and return the endpoint URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/v1/public/randomusers", addr)
    }

    /// Mock API that echoes `limit` users and records each query string
    async fn mock_api() -> (String, SeenQueries) {
        async fn handler(
            State(seen): State<SeenQueries>,
            Query(params): Query<HashMap<String, String>>,
        ) -> Json<serde_json::Value> {
            let limit = params
                .get("limit")
                .and_then(|l| l.parse().ok())
                .unwrap_or(0);
            seen.lock().unwrap().push(params);
            Json(fixtures::response_json(limit))
        }

        let seen = SeenQueries::default();
        let router = Router::new()
            .route("/api/v1/public/randomusers", get(handler))
            .with_state(seen.clone());
        (serve(router).await, seen)
    }

    fn client_for(url: &str) -> RandomUsersClient {
        let config = Config {
            api_url: url.to_string(),
            request_timeout_secs: 5,
            ..Config::default()
        };
        RandomUsersClient::new(&config).unwrap()
    }

    #[test]
    fn request_url_carries_page_and_limit() {
        let client = client_for(DEFAULT_API_URL);
        assert_eq!(
            client.request_url(fixtures::count(25)),
            "https://api.freeapi.app/api/v1/public/randomusers?page=1&limit=25"
        );
    }

    #[test]
    fn request_url_ignores_trailing_slash() {
        let client = client_for("http://localhost:9000/users/");
        assert_eq!(
            client.request_url(fixtures::count(500)),
            "http://localhost:9000/users?page=1&limit=500"
        );
    }

    #[test]
    fn parse_users_reads_nested_data() {
        let body = serde_json::to_vec(&fixtures::response_json(2)).unwrap();
        let users = parse_users(&body).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "liam.walker@example.com");
        assert_eq!(users[1].email, "sofia.lehmann@example.com");
    }

    #[test]
    fn parse_users_rejects_missing_envelope() {
        let err = parse_users(br#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert!(err.to_string().starts_with("Unexpected response format"));
    }

    #[test]
    fn status_error_reads_like_a_failed_response() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "Network response was not ok"
        );
    }

    #[tokio::test]
    async fn fetch_requests_exactly_the_submitted_limit() {
        let (url, seen) = mock_api().await;
        let client = client_for(&url);

        let users = client.fetch_users(fixtures::count(3)).await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users, fixtures::users(3));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one request per fetch");
        assert_eq!(seen[0].get("limit").map(String::as_str), Some("3"));
        assert_eq!(seen[0].get("page").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn fetch_through_trait_object() {
        let (url, _seen) = mock_api().await;
        let source: Arc<dyn UserSource> = Arc::new(client_for(&url));

        let users = source.fetch(fixtures::count(4)).await.unwrap();
        assert_eq!(users.len(), 4);
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let router = Router::new().route(
            "/api/v1/public/randomusers",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(&serve(router).await);

        let err = client.fetch_users(fixtures::count(3)).await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn malformed_body_is_a_failure() {
        let router = Router::new().route(
            "/api/v1/public/randomusers",
            get(|| async { Json(serde_json::json!({ "data": { "data": [{ "email": "x" }] } })) }),
        );
        let client = client_for(&serve(router).await);

        let err = client.fetch_users(fixtures::count(1)).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_failure() {
        // Reserve a port, then close it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}/users", addr));
        let err = client.fetch_users(fixtures::count(1)).await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
        assert!(err.to_string().starts_with("Failed to fetch"));
    }
}
