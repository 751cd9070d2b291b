use std::time::Duration;

use serde::Deserialize;

/// Base URL of the username lookup API
pub const DEFAULT_API_URL: &str = "https://api.mojang.com";
/// Base URL of the session server
pub const DEFAULT_SESSION_URL: &str = "https://sessionserver.mojang.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("mojang-api-rs/", env!("CARGO_PKG_VERSION"));

/// Settings for [`MojangClient`](crate::MojangClient)
///
/// Deserializable so host applications can embed it in their own config;
/// missing fields fall back to the public Mojang endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub session_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ClientConfig {
    /// Point both endpoints at custom base URLs (trailing slashes are dropped)
    pub fn with_urls(api_url: &str, session_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            session_url: session_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_url: DEFAULT_SESSION_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
