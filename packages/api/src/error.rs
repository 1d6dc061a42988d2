use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::auth::responses::RejectedResponse;
use shared::models::error::ErrorResponse;
use shared::services::errors::{
    auth_service_errors::AuthServiceError, proxy_service_errors::ProxyServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    AuthService(AuthServiceError),
    ProxyService(ProxyServiceError),
    BadRequest(String),
    MissingToken,
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<ProxyServiceError> for ApiError {
    fn from(error: ProxyServiceError) -> Self {
        ApiError::ProxyService(error)
    }
}

fn rejected(status: StatusCode) -> Response {
    (status, Json(RejectedResponse::default())).into_response()
}

fn failed(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AuthService(AuthServiceError::ValidationError(msg)) => {
                failed(StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::AuthService(AuthServiceError::NotConfigured(_)) => failed(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Server not configured for admin auth"),
            ),
            ApiError::AuthService(
                AuthServiceError::InvalidCredentials
                | AuthServiceError::InvalidToken
                | AuthServiceError::ExpiredToken,
            ) => rejected(StatusCode::UNAUTHORIZED),
            ApiError::AuthService(AuthServiceError::MalformedToken(_)) | ApiError::MissingToken => {
                rejected(StatusCode::BAD_REQUEST)
            }
            ApiError::AuthService(AuthServiceError::TokenError(_)) => failed(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Failed to issue token"),
            ),

            ApiError::ProxyService(ProxyServiceError::ValidationError(msg)) => {
                failed(StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::ProxyService(ProxyServiceError::EndpointNotAllowed(path)) => failed(
                StatusCode::FORBIDDEN,
                ErrorResponse::with_message("Endpoint not allowed", path),
            ),
            ApiError::ProxyService(ProxyServiceError::UpstreamError(msg)) => failed(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_message("Failed to fetch from ML API", msg),
            ),

            ApiError::BadRequest(msg) => failed(StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
        }
    }
}
