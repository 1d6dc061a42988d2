use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, warn};

use crate::config::ProxyConfig;
use crate::models::proxy::requests::ProxyRequest;
use crate::models::proxy::responses::UpstreamResponse;
use crate::repositories::upstream_repository::{UpstreamRepository, UpstreamRequest};
use crate::services::errors::proxy_service_errors::ProxyServiceError;

/// Relays page requests to the prediction API.
#[derive(Clone)]
pub struct ProxyService {
    repository: Arc<dyn UpstreamRepository + Send + Sync>,
    config: ProxyConfig,
}

impl ProxyService {
    pub fn new(repository: Arc<dyn UpstreamRepository + Send + Sync>, config: ProxyConfig) -> Self {
        ProxyService { repository, config }
    }

    pub async fn relay(&self, request: ProxyRequest) -> Result<UpstreamResponse, ProxyServiceError> {
        let upstream_request = self.validate(request)?;
        debug!(
            "Relaying {} {} upstream",
            upstream_request.method, upstream_request.endpoint
        );

        let response = self.repository.send(&upstream_request).await.map_err(|e| {
            warn!(
                "Upstream call {} {} failed: {}",
                upstream_request.method, upstream_request.endpoint, e
            );
            ProxyServiceError::from(e)
        })?;

        debug!(
            "Upstream answered {} for {}",
            response.status, upstream_request.endpoint
        );
        Ok(response)
    }

    fn validate(&self, request: ProxyRequest) -> Result<UpstreamRequest, ProxyServiceError> {
        let endpoint = request
            .endpoint
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                ProxyServiceError::ValidationError("Endpoint parameter is required".to_string())
            })?;

        if !endpoint.starts_with('/') {
            return Err(ProxyServiceError::ValidationError(
                "Endpoint must start with '/'".to_string(),
            ));
        }

        let path = endpoint.split(['?', '#']).next().unwrap_or_default();
        if !self.config.is_endpoint_allowed(path) {
            return Err(ProxyServiceError::EndpointNotAllowed(path.to_string()));
        }

        let method = match request.method.as_deref().map(str::trim) {
            None | Some("") => Method::GET,
            Some(raw) => Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).map_err(|_| {
                ProxyServiceError::ValidationError(format!("Invalid method: {}", raw))
            })?,
        };

        Ok(UpstreamRequest {
            method,
            endpoint,
            body: request.body,
        })
    }
}
