use axum::{routing::get, Router};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::auth::routes())
        .merge(routes::proxy::routes())
        .with_state(state)
}
