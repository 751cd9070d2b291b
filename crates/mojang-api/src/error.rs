//! Error types for the Mojang API client

use std::fmt;

use reqwest::StatusCode;

/// Errors that can occur when talking to the Mojang APIs
#[derive(Debug)]
pub enum MojangError {
    /// The HTTP client could not be built or the request failed in transit
    Http(Box<reqwest::Error>),
    /// Upstream answered with a non-success status (or 204 for an unknown entity)
    Status(StatusCode),
    /// Response body was not the expected JSON document
    Json(serde_json::Error),
    /// Response body parsed but lacked a required field
    MissingField(&'static str),
    /// Username was empty, no request was made
    EmptyUsername,
    /// Session profile carried no properties
    NoProperties,
    /// Texture property value was not valid base64
    Base64(base64::DecodeError),
    /// Decoded texture property was not a valid texture document
    Payload(serde_json::Error),
}

impl MojangError {
    /// True when the error came from decoding the texture property
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::Base64(_) | Self::Payload(_))
    }
}

impl fmt::Display for MojangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Mojang HTTP error: {e}"),
            Self::Status(status) => write!(f, "Mojang returned status {status}"),
            Self::Json(e) => write!(f, "Mojang JSON parse error: {e}"),
            Self::MissingField(field) => write!(f, "Mojang response is missing `{field}`"),
            Self::EmptyUsername => write!(f, "Username is empty"),
            Self::NoProperties => write!(f, "Session profile has no properties"),
            Self::Base64(e) => write!(f, "Texture property is not valid base64: {e}"),
            Self::Payload(e) => write!(f, "Texture property is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for MojangError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Json(e) | Self::Payload(e) => Some(e),
            Self::Base64(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MojangError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

impl From<base64::DecodeError> for MojangError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Base64(e)
    }
}

/// Result type for Mojang API operations
pub type Result<T> = std::result::Result<T, MojangError>;
