//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock catalog injected, enabling E2E testing without reaching
//! the real PokeAPI.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pokedex_core::{
    testing::MockCatalogApi, BrowseConfig, CatalogItemDetail, CatalogQueryEngine, Config,
    ServerConfig,
};

/// Re-export fixtures for test convenience
pub use pokedex_core::testing::fixtures;

/// Test fixture for E2E testing with a mock catalog.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_toggle() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.post("/api/v1/types/0/toggle", json!({})).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure types, Pokémon, failures and delays
    pub api: Arc<MockCatalogApi>,
    /// Engine behind the router
    pub engine: Arc<CatalogQueryEngine>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

/// Types served by the default fixture, in list order.
pub const TYPES: [&str; 4] = ["fire", "flying", "water", "grass"];

/// Small catalog covering single and dual types.
pub fn starter_catalog() -> Vec<CatalogItemDetail> {
    vec![
        fixtures::pokemon(1, "bulbasaur", &["grass", "poison"]),
        fixtures::pokemon(4, "charmander", &["fire"]),
        fixtures::pokemon(6, "charizard", &["fire", "flying"]),
        fixtures::pokemon(7, "squirtle", &["water"]),
        fixtures::pokemon(16, "pidgey", &["normal", "flying"]),
        fixtures::pokemon(146, "moltres", &["fire", "flying"]),
    ]
}

impl TestFixture {
    /// Create a new test fixture with the starter catalog and types loaded.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let api = Arc::new(MockCatalogApi::new());
        api.set_categories(TYPES.iter().map(|t| fixtures::category(t)).collect())
            .await;
        api.set_catalog(test_config.catalog.unwrap_or_else(starter_catalog))
            .await;

        // Create config
        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            browse: BrowseConfig {
                page_limit: test_config.page_limit,
                ..Default::default()
            },
            ..Default::default()
        };

        let engine = Arc::new(
            CatalogQueryEngine::new(api.clone(), config.browse.clone())
                .expect("Failed to create engine"),
        );
        if test_config.load_types {
            engine
                .load_categories()
                .await
                .expect("Failed to load types");
        }

        let state = Arc::new(pokedex_server::state::AppState::new(
            config,
            Arc::clone(&engine),
        ));

        // Create router
        let router = pokedex_server::api::create_router(state);

        Self {
            router,
            api,
            engine,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request("PUT", path, Some(body)).await
    }

    /// Send a PUT request with raw string body (for testing malformed JSON).
    pub async fn put_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Page size
    pub page_limit: u32,
    /// Catalog to serve instead of the starter catalog
    pub catalog: Option<Vec<CatalogItemDetail>>,
    /// Fetch the type list before building the router
    pub load_types: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            page_limit: 20,
            catalog: None,
            load_types: true,
        }
    }
}

impl TestConfig {
    /// Config with a custom page size.
    pub fn with_page_limit(page_limit: u32) -> Self {
        Self {
            page_limit,
            ..Default::default()
        }
    }
}

/// Extract the ids of the Pokémon cards in a view response.
pub fn card_ids(body: &Value) -> Vec<u64> {
    body["pokemon"]
        .as_array()
        .map(|cards| cards.iter().filter_map(|c| c["id"].as_u64()).collect())
        .unwrap_or_default()
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            $response.text
        );
    };
}
