use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub mod auth;
pub mod health;
pub mod proxy;

/// An empty body reads as `T::default()`, so absent fields are reported by
/// the service rather than as a parse failure.
fn parse_json_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}
