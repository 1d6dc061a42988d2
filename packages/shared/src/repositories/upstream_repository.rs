use crate::config::ProxyConfig;
use crate::models::proxy::responses::UpstreamResponse;
use crate::repositories::errors::upstream_repository_errors::UpstreamRepositoryError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// A validated request, ready to be forwarded to the prediction API.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamRepository: Send + Sync {
    async fn send(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, UpstreamRepositoryError>;
}

pub struct HttpUpstreamRepository {
    client: Client,
    base_url: String,
}

impl HttpUpstreamRepository {
    pub fn new(config: &ProxyConfig) -> Result<Self, UpstreamRepositoryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamRepositoryError::Request(e.to_string()))?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    pub fn with_client(client: Client, base_url: String) -> Self {
        HttpUpstreamRepository { client, base_url }
    }
}

fn classify(error: reqwest::Error) -> UpstreamRepositoryError {
    if error.is_timeout() {
        UpstreamRepositoryError::Timeout(error.to_string())
    } else if error.is_decode() {
        UpstreamRepositoryError::InvalidResponse(error.to_string())
    } else {
        UpstreamRepositoryError::Request(error.to_string())
    }
}

#[async_trait]
impl UpstreamRepository for HttpUpstreamRepository {
    async fn send(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, UpstreamRepositoryError> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        let mut builder = self.client.request(request.method.clone(), &url);

        if request.method == Method::POST {
            if let Some(body) = request.body.as_ref().filter(|b| !b.is_null()) {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.map_err(classify)?;

        Ok(UpstreamResponse { status, body })
    }
}
