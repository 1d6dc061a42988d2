use axum::{
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts},
};
use shared::models::auth::requests::VerifyQuery;

use crate::error::ApiError;

/// A token presented as `Authorization: Bearer <token>` or `?token=<token>`.
///
/// The header wins when both are present.
#[derive(Debug, Clone)]
pub struct PresentedToken(pub String);

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token.trim().to_string()).filter(|t| !t.is_empty())
}

fn query_token(parts: &Parts) -> Option<String> {
    let Query(query) = Query::<VerifyQuery>::try_from_uri(&parts.uri).ok()?;
    // Form decoding turns an unescaped '+' into a space; base64 never has spaces.
    query
        .token
        .map(|t| t.trim().replace(' ', "+"))
        .filter(|t| !t.is_empty())
}

impl<S> FromRequestParts<S> for PresentedToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(parts)
            .or_else(|| query_token(parts))
            .map(PresentedToken)
            .ok_or(ApiError::MissingToken)
    }
}
