use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A relay request as posted by the page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProxyRequest {
    pub endpoint: Option<String>,
    pub method: Option<String>,
    pub body: Option<Value>,
}

/// The GET form of [`ProxyRequest`]; `body`, when given, is JSON text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyQuery {
    pub endpoint: Option<String>,
    pub method: Option<String>,
    pub body: Option<String>,
}

impl From<ProxyQuery> for ProxyRequest {
    fn from(query: ProxyQuery) -> Self {
        let body = query.body.map(|raw| {
            serde_json::from_str(&raw).unwrap_or(Value::String(raw))
        });
        ProxyRequest {
            endpoint: query.endpoint,
            method: query.method,
            body,
        }
    }
}
