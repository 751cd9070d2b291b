use crafatar_urls::{AssetKind, AssetUrls, Crafatar, RenderOptions};
use mojang_api::{Identity, MojangClient};
use tracing::debug;

use crate::config::UserDataConfig;
use crate::error::{Result, UserDataError};
use crate::profile::{ensure_same_id, BasicData, NormalizedProfile};

/// Player lookup service
///
/// Stateless apart from the shared HTTP connection pool: no caching, no
/// retries, and every call is independent, so a single instance can be
/// shared behind an `Arc` and used concurrently.
#[derive(Debug, Clone)]
pub struct UserData {
    mojang: MojangClient,
    crafatar: Crafatar,
}

impl UserData {
    /// Create a service for the public Mojang and Crafatar endpoints
    pub fn new() -> Result<Self> {
        Self::with_config(UserDataConfig::default())
    }

    /// Create a service from explicit endpoints and render URL
    pub fn with_config(config: UserDataConfig) -> Result<Self> {
        let mojang = MojangClient::with_config(config.mojang).map_err(UserDataError::Client)?;
        Ok(Self::from_parts(
            mojang,
            Crafatar::with_base_url(&config.render_url),
        ))
    }

    /// Build from an existing client, e.g. one sharing a connection pool
    pub fn from_parts(mojang: MojangClient, crafatar: Crafatar) -> Self {
        Self { mojang, crafatar }
    }

    async fn identity(&self, name: &str) -> Result<Identity> {
        self.mojang
            .lookup_username(name)
            .await
            .map_err(|e| UserDataError::not_found(name, e))
    }

    /// Username to undashed UUID
    pub async fn resolve_uuid(&self, name: &str) -> Result<String> {
        Ok(self.identity(name).await?.id)
    }

    /// UUID (dashed or not) to current username
    pub async fn resolve_name(&self, uuid: &str) -> Result<String> {
        let session = self
            .mojang
            .session_profile(uuid)
            .await
            .map_err(|e| UserDataError::not_found(uuid, e))?;
        ensure_same_id(uuid, &session.id)?;
        Ok(session.name)
    }

    /// Username to full profile: UUID, name, skin, cape and model
    ///
    /// Two sequential requests; the session profile must describe the player
    /// the username resolved to.
    pub async fn get_profile(&self, name: &str) -> Result<NormalizedProfile> {
        let identity = self.identity(name).await?;
        self.profile_by_id(&identity.id).await
    }

    /// UUID to full profile, skipping the username lookup
    pub async fn profile_by_id(&self, id: &str) -> Result<NormalizedProfile> {
        let session = self
            .mojang
            .session_profile(id)
            .await
            .map_err(|e| UserDataError::not_found(id, e))?;
        ensure_same_id(id, &session.id)?;

        let profile = NormalizedProfile::from_session(&session)?;
        debug!(
            id = %profile.id,
            name = %profile.name,
            has_skin = profile.skin.is_some(),
            has_cape = profile.cape.is_some(),
            slim = profile.is_slim,
            "Decoded profile"
        );
        Ok(profile)
    }

    /// Resolve a username and template one image URL from its UUID
    pub async fn asset_url(&self, name: &str, kind: AssetKind) -> Result<String> {
        let identity = self.identity(name).await?;
        Ok(self.crafatar.url(kind, &identity.id))
    }

    /// Like [`asset_url`](Self::asset_url) with size, scale, overlay or default skin
    pub async fn asset_url_with(
        &self,
        name: &str,
        kind: AssetKind,
        options: &RenderOptions,
    ) -> Result<String> {
        let identity = self.identity(name).await?;
        Ok(self.crafatar.url_with(kind, &identity.id, options)?)
    }

    /// Every image URL for a username from a single lookup
    pub async fn asset_urls(&self, name: &str) -> Result<AssetUrls> {
        let identity = self.identity(name).await?;
        Ok(self.crafatar.all(&identity.id))
    }

    /// 2D skin texture image
    pub async fn get_skin_url(&self, name: &str) -> Result<String> {
        self.asset_url(name, AssetKind::Skin).await
    }

    /// 2D face
    pub async fn get_avatar_url(&self, name: &str) -> Result<String> {
        self.asset_url(name, AssetKind::Avatar).await
    }

    /// Raw cape texture image
    pub async fn get_cape_url(&self, name: &str) -> Result<String> {
        self.asset_url(name, AssetKind::Cape).await
    }

    /// 3D render of the whole body
    pub async fn get_body_render_url(&self, name: &str) -> Result<String> {
        self.asset_url(name, AssetKind::BodyRender).await
    }

    /// 3D render of the head
    pub async fn get_head_render_url(&self, name: &str) -> Result<String> {
        self.asset_url(name, AssetKind::HeadRender).await
    }

    /// Username and UUID with the canonical capitalisation of the name
    pub async fn get_basic_data(&self, name: &str) -> Result<BasicData> {
        Ok(self.identity(name).await?.into())
    }
}
