use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: String) -> Self {
        LoginResponse { ok: true, token }
    }
}

/// Field order is part of the token format: the signature covers the
/// serialized JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenClaims {
    pub iat: i64, // issued at (unix millis)
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyResponse {
    pub ok: bool,
    pub data: TokenClaims,
}

impl VerifyResponse {
    pub fn new(data: TokenClaims) -> Self {
        VerifyResponse { ok: true, data }
    }
}

/// `{ "ok": false }`, the body of every rejected login or verification.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RejectedResponse {
    pub ok: bool,
}

impl Default for RejectedResponse {
    fn default() -> Self {
        RejectedResponse { ok: false }
    }
}
