//! Configuration for the blog list client.

/// Configuration for the blog list client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server origin, without the `/api` prefix.
    pub base_url: String,
    /// Connection timeout in seconds.
    pub connection_timeout_secs: u64,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Enable request logging.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:3003".to_string(),
            connection_timeout_secs: 10,
            request_timeout_ms: 30000,
            enable_logging: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
