use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use lambda_http::tracing::{error, warn};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{error::ApiError, routes::parse_json_body, state::AppState};
use shared::models::proxy::requests::{ProxyQuery, ProxyRequest};

/// The relay is called cross-origin, so it answers every preflight itself
/// and never reaches the upstream for one. Allowed methods and headers are
/// advertised on every response, not only on preflights.
pub fn routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/ml-proxy", get(relay_query).post(relay_body))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

async fn relay_query(
    State(state): State<AppState>,
    query: Result<Query<ProxyQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected relay query string: {}", rejection.body_text());
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    })?;
    relay(state, ProxyRequest::from(query)).await
}

async fn relay_body(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: ProxyRequest = parse_json_body(&body)?;
    relay(state, request).await
}

async fn relay(state: AppState, request: ProxyRequest) -> Result<Response, ApiError> {
    let endpoint = request.endpoint.clone().unwrap_or_default();
    let upstream = state.proxy_service.relay(request).await.map_err(|e| {
        error!("Proxy error for {:?}: {}", endpoint, e);
        ApiError::from(e)
    })?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok((status, Json(upstream.body)).into_response())
}
