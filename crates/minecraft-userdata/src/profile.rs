//! Normalized player profile

use chrono::{DateTime, Utc};
use mojang_api::{decode_textures, normalize_id, Identity, SessionProfile};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::{Result, UserDataError};

/// Serialized value of [`NormalizedProfile::cape`] when no cape is equipped
pub const NO_CAPE_FOUND: &str = "No cape found";

/// Skin geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureModel {
    Classic,
    Slim,
}

/// Player profile flattened from the session profile and its texture payload
///
/// `cape` is `None` when no cape is equipped and serializes as
/// [`NO_CAPE_FOUND`]; `skin` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub id: String,
    pub name: String,
    /// Epoch millis
    pub timestamp: i64,
    pub skin: Option<String>,
    #[serde(
        default,
        serialize_with = "cape_to_sentinel",
        deserialize_with = "cape_from_sentinel"
    )]
    pub cape: Option<String>,
    pub is_slim: bool,
}

impl NormalizedProfile {
    /// Decode the texture payload of a session profile
    ///
    /// Fails with `ProfileNotFound` when there is no property, `MalformedPayload`
    /// when it does not decode, and `InconsistentProfile` when the payload names
    /// a different player than the session profile.
    pub fn from_session(session: &SessionProfile) -> Result<Self> {
        let payload = decode_textures(session).map_err(|e| {
            if e.is_malformed_payload() {
                warn!(id = %session.id, error = %e, "Undecodable texture payload");
            }
            UserDataError::from_profile(&session.id, e)
        })?;

        if let Some(ref profile_id) = payload.profile_id {
            ensure_same_id(&session.id, profile_id)?;
        }

        let textures = payload.textures;
        let is_slim = textures
            .skin
            .as_ref()
            .map(|skin| skin.is_slim())
            .unwrap_or(false);

        Ok(Self {
            id: session.id.clone(),
            name: session.name.clone(),
            timestamp: payload.timestamp,
            skin: textures.skin.map(|skin| skin.url),
            cape: textures.cape.map(|cape| cape.url),
            is_slim,
        })
    }

    pub fn model(&self) -> TextureModel {
        if self.is_slim {
            TextureModel::Slim
        } else {
            TextureModel::Classic
        }
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    pub fn cape_or_sentinel(&self) -> &str {
        self.cape.as_deref().unwrap_or(NO_CAPE_FOUND)
    }
}

/// Username and UUID of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicData {
    pub username: String,
    pub uuid: String,
}

impl From<Identity> for BasicData {
    fn from(identity: Identity) -> Self {
        Self {
            username: identity.name,
            uuid: identity.id,
        }
    }
}

/// Require two UUIDs to name the same player, ignoring dashes and case
pub(crate) fn ensure_same_id(expected: &str, actual: &str) -> Result<()> {
    if normalize_id(expected) == normalize_id(actual) {
        return Ok(());
    }
    warn!(expected = %expected, actual = %actual, "Upstream returned a different player");
    Err(UserDataError::InconsistentProfile {
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

fn cape_to_sentinel<S: Serializer>(
    cape: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(cape.as_deref().unwrap_or(NO_CAPE_FOUND))
}

fn cape_from_sentinel<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let cape = Option::<String>::deserialize(deserializer)?;
    Ok(cape.filter(|url| url != NO_CAPE_FOUND))
}
