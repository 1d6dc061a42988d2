use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct LoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
}

#[derive(Deserialize)]
pub struct Claims {
    pub iat: i64,
    pub username: String,
}

#[derive(Deserialize)]
pub struct VerifyResponse {
    pub ok: bool,
    pub data: Claims,
}

#[derive(Serialize)]
pub struct ProxyPayload<'a> {
    pub endpoint: &'a str,
    pub method: &'a str,
    pub body: Option<Value>,
}
