pub mod auth_service_errors;
pub mod proxy_service_errors;
pub mod token_service_errors;
