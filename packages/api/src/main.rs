use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;

use api::{create_app, AppState};
use shared::config::{AuthConfig, ProxyConfig};
use shared::repositories::upstream_repository::HttpUpstreamRepository;
use shared::services::auth_service::AuthService;
use shared::services::proxy_service::ProxyService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let auth_config = AuthConfig::from_env();
    if auth_config.signing_secret.is_none() {
        tracing::warn!("AUTH_SECRET is unset, login and verify will answer 500");
    }
    let proxy_config = ProxyConfig::from_env();
    tracing::info!(
        "Relaying to {} for {:?}",
        proxy_config.base_url,
        proxy_config.allowed_endpoints
    );

    let upstream_repository = Arc::new(HttpUpstreamRepository::new(&proxy_config)?);
    let proxy_service = Arc::new(ProxyService::new(upstream_repository, proxy_config));
    let auth_service = Arc::new(AuthService::new(auth_config));

    let app = create_app(AppState {
        auth_service,
        proxy_service,
    });

    run(app).await
}
