use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenServiceError {
    /// Not a `payload.signature` pair, or the payload is not base64 JSON claims.
    MalformedToken(String),
    /// Well formed, but the signature does not match the payload.
    InvalidToken,
    Serialization(String),
}

impl fmt::Display for TokenServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenServiceError::MalformedToken(msg) => write!(f, "Malformed token: {}", msg),
            TokenServiceError::InvalidToken => write!(f, "Invalid token signature"),
            TokenServiceError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TokenServiceError {}
