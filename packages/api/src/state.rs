use std::sync::Arc;

use shared::services::auth_service::AuthService;
use shared::services::proxy_service::ProxyService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub proxy_service: Arc<ProxyService>,
}
