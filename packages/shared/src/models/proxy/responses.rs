use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the upstream answered, relayed to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}
