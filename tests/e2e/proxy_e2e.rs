use crate::common::api_helpers::*;
use crate::common::utils::base_url;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires BASE_URL and a reachable ML API"]
async fn e2e_proxy_relays_model_health() {
    let response = ml_proxy(&http_client(), "/health", "GET", None).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let _: Value = response.json().await.expect("relay returned non-JSON body");
}

#[tokio::test]
#[ignore = "requires BASE_URL and a reachable ML API"]
async fn e2e_proxy_relays_prediction() {
    let features = json!({
        "square_feet": 1800,
        "num_bedrooms": 3,
        "num_bathrooms": 2,
        "year_built": 2005,
        "distance_to_city": 7.0
    });

    let response = ml_proxy(&http_client(), "/predict", "POST", Some(features)).await;

    assert!(response.status().is_success(), "got {}", response.status());
}

#[tokio::test]
#[ignore = "requires BASE_URL of a deployed stage"]
async fn e2e_proxy_rejects_unlisted_endpoint() {
    let response = ml_proxy(&http_client(), "/admin", "GET", None).await;

    assert_eq!(response.status(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Endpoint not allowed");
}

#[tokio::test]
#[ignore = "requires BASE_URL of a deployed stage"]
async fn e2e_proxy_answers_preflight() {
    let response = http_client()
        .request(reqwest::Method::OPTIONS, format!("{}/api/ml-proxy", base_url()))
        .header("Origin", "https://portfolio.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Failed to send preflight");

    assert_eq!(response.status(), 200);
}
