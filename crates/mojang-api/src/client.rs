//! Mojang API HTTP client

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{MojangError, Result};
use crate::types::{Identity, IdentityResponse, SessionProfile};

/// Client for the Mojang username lookup and session profile endpoints
///
/// Holds no per-player state, so one instance can be shared across tasks.
/// Every call issues exactly one request and never retries.
#[derive(Debug, Clone)]
pub struct MojangClient {
    http: reqwest::Client,
    api_url: String,
    session_url: String,
}

impl MojangClient {
    /// Create a client for the public Mojang endpoints
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from explicit settings
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url,
            session_url: config.session_url,
        })
    }

    /// Resolve a username to its UUID and canonical name
    ///
    /// Unknown names come back as [`MojangError::Status`] (404, or 204 from
    /// older deployments); a body without `id` is [`MojangError::MissingField`].
    pub async fn lookup_username(&self, username: &str) -> Result<Identity> {
        let username = username.trim();
        if username.is_empty() {
            return Err(MojangError::EmptyUsername);
        }

        let url = format!(
            "{}/users/profiles/minecraft/{}",
            self.api_url,
            urlencoding::encode(username)
        );
        let data: IdentityResponse = self.get_json(&url).await?;

        let id = data
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(MojangError::MissingField("id"))?;
        let name = data.name.ok_or(MojangError::MissingField("name"))?;
        debug!(username = %username, id = %id, "Resolved username");

        Ok(Identity { id, name })
    }

    /// Fetch the session profile (name and signed texture property) for a UUID
    pub async fn session_profile(&self, id: &str) -> Result<SessionProfile> {
        let url = format!(
            "{}/session/minecraft/profile/{}",
            self.session_url,
            urlencoding::encode(id.trim())
        );
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
            debug!(url = %url, status = %status, "Mojang returned no entity");
            return Err(MojangError::Status(status));
        }
        if !status.is_success() {
            warn!(url = %url, status = %status, "Mojang request failed");
            return Err(MojangError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to parse Mojang response");
            MojangError::Json(e)
        })
    }
}
