use chrono::Utc;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::config::AuthConfig;
use crate::models::auth::responses::{LoginResponse, TokenClaims};
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::token_service::TokenService;

pub trait AuthServiceTrait: Send + Sync {
    fn authenticate_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthServiceError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError>;
}

/// Single-admin login and token verification against [`AuthConfig`].
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        AuthService { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.admin_username.is_some()
            && self.config.admin_password.is_some()
            && self.config.signing_secret.is_some()
    }

    fn token_service(&self) -> Result<TokenService, AuthServiceError> {
        self.config
            .signing_secret
            .as_deref()
            .map(TokenService::new)
            .ok_or_else(|| AuthServiceError::NotConfigured("AUTH_SECRET".to_string()))
    }

    fn check_age(&self, claims: &TokenClaims) -> Result<(), AuthServiceError> {
        let Some(max_age) = self.config.token_max_age else {
            return Ok(());
        };
        let limit_millis = i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX);
        let age_millis = Utc::now().timestamp_millis().saturating_sub(claims.iat);
        if age_millis > limit_millis {
            return Err(AuthServiceError::ExpiredToken);
        }
        Ok(())
    }
}

fn secure_eq(supplied: &str, expected: &str) -> bool {
    bool::from(supplied.as_bytes().ct_eq(expected.as_bytes()))
}

impl AuthServiceTrait for AuthService {
    fn authenticate_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Missing username or password".to_string(),
            ));
        }

        let admin_username = self
            .config
            .admin_username
            .as_deref()
            .ok_or_else(|| AuthServiceError::NotConfigured("ADMIN_USER".to_string()))?;
        let admin_password = self
            .config
            .admin_password
            .as_deref()
            .ok_or_else(|| AuthServiceError::NotConfigured("ADMIN_PASSWORD".to_string()))?;
        let token_service = self.token_service()?;

        // Both comparisons always run so timing does not reveal which one failed.
        let username_ok = secure_eq(username, admin_username);
        let password_ok = secure_eq(password, admin_password);
        if !(username_ok & password_ok) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let claims = TokenClaims {
            iat: Utc::now().timestamp_millis(),
            username: username.to_string(),
        };
        let token = token_service.issue(&claims)?;
        debug!("Issued admin token for {}", claims.username);

        Ok(LoginResponse::new(token))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        if token.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Token cannot be empty".to_string(),
            ));
        }

        let claims = self.token_service()?.verify(token)?;
        self.check_age(&claims)?;
        Ok(claims)
    }
}
