use crate::services::errors::token_service_errors::TokenServiceError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthServiceError {
    ValidationError(String),
    NotConfigured(String),
    InvalidCredentials,
    MalformedToken(String),
    InvalidToken,
    ExpiredToken,
    TokenError(String),
}

impl From<TokenServiceError> for AuthServiceError {
    fn from(error: TokenServiceError) -> Self {
        match error {
            TokenServiceError::MalformedToken(msg) => AuthServiceError::MalformedToken(msg),
            TokenServiceError::InvalidToken => AuthServiceError::InvalidToken,
            TokenServiceError::Serialization(msg) => AuthServiceError::TokenError(msg),
        }
    }
}

impl fmt::Display for AuthServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthServiceError::NotConfigured(what) => {
                write!(f, "Server not configured for admin auth: {} is unset", what)
            }
            AuthServiceError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthServiceError::MalformedToken(msg) => write!(f, "Malformed token: {}", msg),
            AuthServiceError::InvalidToken => write!(f, "Invalid token signature"),
            AuthServiceError::ExpiredToken => write!(f, "Token has expired"),
            AuthServiceError::TokenError(msg) => write!(f, "Token error: {}", msg),
        }
    }
}

impl std::error::Error for AuthServiceError {}
