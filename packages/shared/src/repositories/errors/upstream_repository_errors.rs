#[derive(Debug)]
pub enum UpstreamRepositoryError {
    Request(String),
    Timeout(String),
    InvalidResponse(String),
}

impl std::fmt::Display for UpstreamRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamRepositoryError::Request(msg) => write!(f, "Upstream request failed: {}", msg),
            UpstreamRepositoryError::Timeout(msg) => write!(f, "Upstream request timed out: {}", msg),
            UpstreamRepositoryError::InvalidResponse(msg) => {
                write!(f, "Upstream returned an invalid JSON body: {}", msg)
            }
        }
    }
}

impl std::error::Error for UpstreamRepositoryError {}
