#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use api::{create_app, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared::config::{AuthConfig, ProxyConfig};
use shared::repositories::upstream_repository::HttpUpstreamRepository;
use shared::services::auth_service::AuthService;
use shared::services::proxy_service::ProxyService;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-pw";
pub const AUTH_SECRET: &str = "integration-secret";

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        admin_username: Some(ADMIN_USER.to_string()),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        signing_secret: Some(AUTH_SECRET.to_string()),
        token_max_age: None,
    }
}

pub fn proxy_config(base_url: &str) -> ProxyConfig {
    ProxyConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(2),
        ..ProxyConfig::default()
    }
}

pub fn app_with(auth_config: AuthConfig, proxy_config: ProxyConfig) -> Router {
    let upstream_repository = Arc::new(
        HttpUpstreamRepository::new(&proxy_config).expect("Failed to build upstream client"),
    );
    create_app(AppState {
        auth_service: Arc::new(AuthService::new(auth_config)),
        proxy_service: Arc::new(ProxyService::new(upstream_repository, proxy_config)),
    })
}

/// An app whose relay points at a closed port; for tests that never proxy.
pub fn auth_app(auth_config: AuthConfig) -> Router {
    app_with(auth_config, proxy_config("http://127.0.0.1:9"))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
