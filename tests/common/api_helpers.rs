use crate::common::models::*;
use crate::common::utils::*;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

pub fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Failed to build HTTP client")
}

pub async fn login(client: &Client, username: &str, password: &str) -> Response {
    let url = format!("{}/api/login", base_url());
    client
        .post(url)
        .json(&LoginPayload { username, password })
        .send()
        .await
        .expect("Failed to send login request")
}

pub async fn verify(client: &Client, token: Option<&str>) -> Response {
    let url = format!("{}/api/verify", base_url());
    let mut req = client.get(url);
    if let Some(t) = token {
        req = req.header("Authorization", format!("Bearer {}", t));
    }
    req.send().await.expect("Failed to send verify request")
}

pub async fn ml_proxy(client: &Client, endpoint: &str, method: &str, body: Option<Value>) -> Response {
    let url = format!("{}/api/ml-proxy", base_url());
    client
        .post(url)
        .json(&ProxyPayload {
            endpoint,
            method,
            body,
        })
        .send()
        .await
        .expect("Failed to send ml-proxy request")
}

pub async fn token_from_login(resp: Response) -> String {
    assert!(
        resp.status().is_success(),
        "Expected login success, got {}",
        resp.status()
    );
    let body: LoginResponse = resp.json().await.expect("Invalid login response JSON");
    assert!(body.ok);
    assert!(body.token.contains('.'), "token has no signature half");
    body.token
}
