//! Shared test fixtures
//!
//! Each test gets its own in-memory SQLite database behind a single
//! connection, initialized with the same schema step the server runs on start.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use library_catalog::{
    api,
    config::{AppConfig, DatabaseConfig},
    repository::Repository,
    AppState,
};

pub struct TestApp {
    pub router: Router,
    pub repository: Repository,
}

pub async fn build_test_app() -> TestApp {
    let database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = Repository::connect(&database)
        .await
        .expect("Failed to open in-memory database");
    let repository = Repository::new(pool);
    repository
        .init_schema()
        .await
        .expect("Failed to create schema");

    let config = AppConfig {
        database,
        ..AppConfig::default()
    };
    let router = api::create_router(AppState::new(config, repository.clone()));

    TestApp { router, repository }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        let json = serde_json::from_slice(&body).expect("Failed to parse response");
        (status, json)
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        let (status, body) = self.send(request).await;
        let json = serde_json::from_slice(&body).expect("Failed to parse response");
        (status, json)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        (status, body)
    }
}
