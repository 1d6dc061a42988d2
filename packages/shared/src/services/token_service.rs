//! Stateless signed tokens.
//!
//! A token is `base64(claims_json) + "." + hex(hmac_sha256(secret, claims_json))`.
//! The claims are readable by anyone holding the token; the signature only
//! protects their integrity.

use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::models::auth::responses::TokenClaims;
use crate::services::errors::token_service_errors::TokenServiceError;

type HmacSha256 = Hmac<Sha256>;

/// Standard alphabet, padding optional on decode.
const PAYLOAD_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        TokenService {
            secret: secret.into(),
        }
    }

    pub fn issue(&self, claims: &TokenClaims) -> Result<String, TokenServiceError> {
        let payload = serde_json::to_string(claims)
            .map_err(|e| TokenServiceError::Serialization(e.to_string()))?;
        let signature = self.sign(payload.as_bytes())?;

        Ok(format!(
            "{}.{}",
            general_purpose::STANDARD.encode(payload.as_bytes()),
            signature
        ))
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenServiceError> {
        let (encoded, signature) = token
            .split_once('.')
            .filter(|(encoded, signature)| !encoded.is_empty() && !signature.is_empty())
            .ok_or_else(|| {
                TokenServiceError::MalformedToken("expected <payload>.<signature>".to_string())
            })?;

        let payload = PAYLOAD_DECODER
            .decode(encoded)
            .map_err(|e| TokenServiceError::MalformedToken(format!("payload: {}", e)))?;

        let expected = self.sign(&payload)?;
        if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            return Err(TokenServiceError::InvalidToken);
        }

        serde_json::from_slice(&payload)
            .map_err(|e| TokenServiceError::MalformedToken(format!("claims: {}", e)))
    }

    fn sign(&self, payload: &[u8]) -> Result<String, TokenServiceError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| TokenServiceError::Serialization(e.to_string()))?;
        mac.update(payload);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
