use crate::repositories::errors::upstream_repository_errors::UpstreamRepositoryError;
use std::fmt;

#[derive(Debug)]
pub enum ProxyServiceError {
    ValidationError(String),
    EndpointNotAllowed(String),
    UpstreamError(String),
}

impl From<UpstreamRepositoryError> for ProxyServiceError {
    fn from(error: UpstreamRepositoryError) -> Self {
        ProxyServiceError::UpstreamError(error.to_string())
    }
}

impl fmt::Display for ProxyServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProxyServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ProxyServiceError::EndpointNotAllowed(endpoint) => {
                write!(f, "Endpoint not allowed: {}", endpoint)
            }
            ProxyServiceError::UpstreamError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProxyServiceError {}
