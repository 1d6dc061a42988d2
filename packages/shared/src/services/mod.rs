pub mod auth_service;
pub mod errors;
pub mod proxy_service;
pub mod token_service;
