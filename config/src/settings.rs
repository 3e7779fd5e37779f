use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors)
}

/// Top-level client configuration.
///
/// One endpoint per backend service plus the transport-level request
/// timeout. The store layer adds no timeout of its own.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "EndpointConfig::auth_default")]
    #[validate(nested)]
    pub auth: EndpointConfig,

    #[serde(default = "EndpointConfig::profile_default")]
    #[validate(nested)]
    pub profile: EndpointConfig,

    #[serde(default = "EndpointConfig::content_default")]
    #[validate(nested)]
    pub content: EndpointConfig,

    /// Request timeout in seconds, applied to every request by the
    /// shared HTTP client.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64
}

/// Origin for a single backend service. The `/api/v1/<service>` path is
/// appended by the client factory.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct EndpointConfig {
    #[validate(url)]
    pub base_url: String
}

impl EndpointConfig {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string()
        }
    }

    fn auth_default() -> Self {
        Self::new("http://localhost:8080")
    }

    fn profile_default() -> Self {
        Self::new("http://localhost:8081")
    }

    fn content_default() -> Self {
        Self::new("http://localhost:8082")
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth: EndpointConfig::auth_default(),
            profile: EndpointConfig::profile_default(),
            content: EndpointConfig::content_default(),
            timeout_seconds: default_timeout_seconds()
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from `VOXSCRIBE_*` environment variables,
    /// starting from the defaults.
    ///
    /// Recognized: `VOXSCRIBE_AUTH_URL`, `VOXSCRIBE_PROFILE_URL`,
    /// `VOXSCRIBE_CONTENT_URL`, `VOXSCRIBE_TIMEOUT_SECONDS`.
    pub fn detect_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VOXSCRIBE_AUTH_URL") {
            config.auth.base_url = url;
        }
        if let Ok(url) = std::env::var("VOXSCRIBE_PROFILE_URL") {
            config.profile.base_url = url;
        }
        if let Ok(url) = std::env::var("VOXSCRIBE_CONTENT_URL") {
            config.content.base_url = url;
        }
        if let Ok(timeout) = std::env::var("VOXSCRIBE_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(seconds) => config.timeout_seconds = seconds,
                Err(_) => {
                    tracing::warn!(value = %timeout, "ignoring invalid VOXSCRIBE_TIMEOUT_SECONDS")
                }
            }
        }

        config
    }

    /// Points every service at a single origin. Useful behind a reverse
    /// proxy that routes `/api/v1/<service>` paths itself, and in tests.
    pub fn single_origin(origin: &str) -> Self {
        Self {
            auth: EndpointConfig::new(origin),
            profile: EndpointConfig::new(origin),
            content: EndpointConfig::new(origin),
            timeout_seconds: default_timeout_seconds()
        }
    }
}
