//! Data types for Mojang API responses
//!
//! The session server wraps the texture document in a base64 string inside the
//! profile JSON; [`TexturePayload`] is that inner document.

use serde::{Deserialize, Deserializer, Serialize};

/// Player identity from `GET /users/profiles/minecraft/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Undashed UUID
    pub id: String,
    /// Current name with canonical capitalisation
    pub name: String,
}

/// Raw identity body; fields are optional so a missing `id` can be reported
#[derive(Debug, Deserialize)]
pub(crate) struct IdentityResponse {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
}

/// Session profile from `GET /session/minecraft/profile/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProfile {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Vec<ProfileProperty>,
}

/// Treat `"properties": null` the same as a missing key
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<ProfileProperty>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProfileProperty>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single signed profile property; `value` is base64 encoded JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Decoded texture document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TexturePayload {
    /// Epoch millis at which the session server produced the payload
    #[serde(default)]
    pub timestamp: i64,
    pub profile_id: Option<String>,
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    #[serde(default)]
    pub textures: Textures,
}

/// Equipped textures; both entries are optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Textures {
    #[serde(rename = "SKIN", default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<SkinTexture>,
    #[serde(rename = "CAPE", default, skip_serializing_if = "Option::is_none")]
    pub cape: Option<CapeTexture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinTexture {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SkinMetadata>,
}

impl SkinTexture {
    /// Slim ("Alex") arms are flagged only by `metadata.model == "slim"`
    pub fn is_slim(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.model.as_deref())
            .map(|model| model == "slim")
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinMetadata {
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapeTexture {
    pub url: String,
}

/// Strip dashes and lowercase a UUID so dashed and undashed forms compare equal
pub fn normalize_id(id: &str) -> String {
    id.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
