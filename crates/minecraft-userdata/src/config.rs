use crafatar_urls::DEFAULT_BASE_URL;
use mojang_api::ClientConfig;
use serde::Deserialize;

/// Settings for [`UserData`](crate::UserData)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserDataConfig {
    /// Mojang endpoints, timeout and user agent
    pub mojang: ClientConfig,
    /// Root of the image/render service
    pub render_url: String,
}

impl Default for UserDataConfig {
    fn default() -> Self {
        Self {
            mojang: ClientConfig::default(),
            render_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
