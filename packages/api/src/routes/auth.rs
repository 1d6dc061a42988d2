use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use lambda_http::tracing::{debug, error, warn};

use crate::{error::ApiError, middleware::auth::PresentedToken, routes::parse_json_body, state::AppState};
use shared::models::auth::requests::LoginRequest;
use shared::models::auth::responses::{LoginResponse, VerifyResponse};
use shared::services::auth_service::AuthServiceTrait;
use shared::services::errors::auth_service_errors::AuthServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login).fallback(login_wrong_method))
        .route("/api/verify", get(verify))
}

async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let login_data: LoginRequest = parse_json_body(&body)?;
    let username = login_data.username.unwrap_or_default();
    let password = login_data.password.unwrap_or_default();

    state
        .auth_service
        .authenticate_admin(&username, &password)
        .map(Json)
        .map_err(|e| {
            match &e {
                AuthServiceError::InvalidCredentials | AuthServiceError::ValidationError(_) => {
                    warn!("Rejected admin login for {:?}: {}", username, e)
                }
                _ => error!("Failed to authenticate admin {:?}: {}", username, e),
            }
            ApiError::from(e)
        })
}

async fn login_wrong_method() -> ApiError {
    ApiError::BadRequest("Method not allowed".to_string())
}

async fn verify(
    State(state): State<AppState>,
    PresentedToken(token): PresentedToken,
) -> Result<Json<VerifyResponse>, ApiError> {
    let claims = state.auth_service.verify_token(&token).map_err(|e| {
        match &e {
            AuthServiceError::NotConfigured(_) => error!("Cannot verify token: {}", e),
            _ => debug!("Token rejected: {}", e),
        }
        ApiError::from(e)
    })?;
    debug!("Verified token for {}", claims.username);
    Ok(Json(VerifyResponse::new(claims)))
}
