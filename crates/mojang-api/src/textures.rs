//! Texture property decoding
//!
//! Order is fixed by the session server format: outer profile JSON, then
//! base64 of the first property's `value`, then the inner texture JSON.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{MojangError, Result};
use crate::types::{SessionProfile, TexturePayload};

/// Decode the texture document carried by the first property of a profile
pub fn decode_textures(profile: &SessionProfile) -> Result<TexturePayload> {
    let property = profile
        .properties
        .first()
        .ok_or(MojangError::NoProperties)?;
    decode_texture_value(&property.value)
}

/// Decode a single base64 texture property value
pub fn decode_texture_value(value: &str) -> Result<TexturePayload> {
    let bytes = STANDARD.decode(value.trim())?;
    serde_json::from_slice(&bytes).map_err(MojangError::Payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProfileProperty;

    fn profile_with_value(value: String) -> SessionProfile {
        SessionProfile {
            id: "987111ae0b1947e689e9db260e7ab860".to_string(),
            name: "AsteroidsMC".to_string(),
            properties: vec![ProfileProperty {
                name: "textures".to_string(),
                value,
                signature: None,
            }],
        }
    }

    #[test]
    fn test_decode_skin_and_cape() {
        let value = STANDARD.encode(r#"{"textures":{"SKIN":{"url":"X"},"CAPE":{"url":"Y"}}}"#);
        let payload = decode_textures(&profile_with_value(value)).unwrap();

        assert_eq!(payload.textures.skin.as_ref().unwrap().url, "X");
        assert_eq!(payload.textures.cape.as_ref().unwrap().url, "Y");
        assert!(!payload.textures.skin.unwrap().is_slim());
        assert_eq!(payload.timestamp, 0);
    }

    #[test]
    fn test_decode_uses_first_property() {
        let mut profile = profile_with_value(STANDARD.encode(r#"{"timestamp": 1}"#));
        profile.properties.push(ProfileProperty {
            name: "textures".to_string(),
            value: "not base64 at all!".to_string(),
            signature: None,
        });

        let payload = decode_textures(&profile).unwrap();
        assert_eq!(payload.timestamp, 1);
    }

    #[test]
    fn test_decode_without_properties() {
        let mut profile = profile_with_value(String::new());
        profile.properties.clear();

        let err = decode_textures(&profile).unwrap_err();
        assert!(matches!(err, MojangError::NoProperties));
    }

    #[test]
    fn test_decode_invalid_base64() {
        let err = decode_texture_value("%%% not base64 %%%").unwrap_err();
        assert!(matches!(err, MojangError::Base64(_)));
        assert!(err.is_malformed_payload());
    }

    #[test]
    fn test_decode_invalid_inner_json() {
        let err = decode_texture_value(&STANDARD.encode("not json")).unwrap_err();
        assert!(matches!(err, MojangError::Payload(_)));
        assert!(err.is_malformed_payload());
    }
}
