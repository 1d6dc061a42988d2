use std::time::Duration;

pub const DEFAULT_ML_API_BASE: &str = "https://machinelearningmodel-t8i3.onrender.com";
pub const DEFAULT_ALLOWED_ENDPOINTS: &[&str] = &["/health", "/model_info", "/predict"];
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Admin credentials and token settings.
///
/// Every value is optional so a misconfigured deployment still answers
/// requests (with a 500) instead of failing at cold start.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub signing_secret: Option<String>,
    pub token_max_age: Option<Duration>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        AuthConfig {
            admin_username: non_empty(lookup("ADMIN_USER")),
            admin_password: non_empty(lookup("ADMIN_PASSWORD")),
            signing_secret: non_empty(lookup("AUTH_SECRET")),
            token_max_age: parse_secs(lookup("TOKEN_MAX_AGE_SECS")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub base_url: String,
    pub allowed_endpoints: Vec<String>,
    pub timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            base_url: DEFAULT_ML_API_BASE.to_string(),
            allowed_endpoints: DEFAULT_ALLOWED_ENDPOINTS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProxyConfig::default();

        let base_url = non_empty(lookup("ML_API_BASE"))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let allowed_endpoints = non_empty(lookup("ML_PROXY_ALLOWED_ENDPOINTS"))
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.allowed_endpoints);

        let timeout = parse_secs(lookup("ML_PROXY_TIMEOUT_SECS")).unwrap_or(defaults.timeout);

        ProxyConfig {
            base_url,
            allowed_endpoints,
            timeout,
        }
    }

    /// `*` in the allow-list permits any path.
    pub fn is_endpoint_allowed(&self, path: &str) -> bool {
        self.allowed_endpoints
            .iter()
            .any(|allowed| allowed == "*" || allowed == path)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_secs(value: Option<String>) -> Option<Duration> {
    non_empty(value)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
