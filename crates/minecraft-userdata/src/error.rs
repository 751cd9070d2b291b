//! Error types for player lookups

use std::fmt;

use crafatar_urls::UrlError;
use mojang_api::MojangError;

/// Errors returned by [`UserData`](crate::UserData) operations
///
/// Every variant is terminal for the call that produced it; nothing is retried
/// and no placeholder value is substituted.
#[derive(Debug)]
pub enum UserDataError {
    /// The lookup failed upstream or the player does not exist
    NotFound { query: String, source: MojangError },
    /// The player exists but the session profile has no texture property
    ProfileNotFound(String),
    /// The texture property is present but could not be decoded
    MalformedPayload { id: String, source: MojangError },
    /// Upstream documents disagree about which player they describe
    InconsistentProfile { expected: String, actual: String },
    /// Render options rejected for the requested image
    InvalidRenderOptions(UrlError),
    /// HTTP client could not be built
    Client(MojangError),
}

impl UserDataError {
    pub(crate) fn not_found(query: &str, source: MojangError) -> Self {
        Self::NotFound {
            query: query.to_string(),
            source,
        }
    }

    /// Sort a session-profile decoding failure into the lookup taxonomy
    pub(crate) fn from_profile(id: &str, source: MojangError) -> Self {
        match source {
            MojangError::NoProperties => Self::ProfileNotFound(id.to_string()),
            e if e.is_malformed_payload() => Self::MalformedPayload {
                id: id.to_string(),
                source: e,
            },
            e => Self::not_found(id, e),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for UserDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { query, source } => write!(f, "User not found: {query} ({source})"),
            Self::ProfileNotFound(id) => write!(f, "Profile not found for {id}"),
            Self::MalformedPayload { id, source } => {
                write!(f, "Malformed texture payload for {id}: {source}")
            }
            Self::InconsistentProfile { expected, actual } => write!(
                f,
                "Inconsistent profile: expected id {expected}, upstream returned {actual}"
            ),
            Self::InvalidRenderOptions(e) => write!(f, "Invalid render options: {e}"),
            Self::Client(e) => write!(f, "Failed to create HTTP client: {e}"),
        }
    }
}

impl std::error::Error for UserDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { source, .. } | Self::MalformedPayload { source, .. } => Some(source),
            Self::InvalidRenderOptions(e) => Some(e),
            Self::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UrlError> for UserDataError {
    fn from(e: UrlError) -> Self {
        Self::InvalidRenderOptions(e)
    }
}

pub type Result<T> = std::result::Result<T, UserDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = UserDataError::not_found("Nobody", MojangError::EmptyUsername);
        assert_eq!(format!("{}", err), "User not found: Nobody (Username is empty)");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_profile_classification() {
        let err = UserDataError::from_profile("abc", MojangError::NoProperties);
        assert!(matches!(err, UserDataError::ProfileNotFound(ref id) if id == "abc"));

        let err = UserDataError::from_profile(
            "abc",
            MojangError::Base64(base64::DecodeError::InvalidPadding),
        );
        assert!(matches!(err, UserDataError::MalformedPayload { .. }));

        let err = UserDataError::from_profile("abc", MojangError::MissingField("id"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_inconsistent_display() {
        let err = UserDataError::InconsistentProfile {
            expected: "aaa".to_string(),
            actual: "bbb".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Inconsistent profile: expected id aaa, upstream returned bbb"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = UserDataError::not_found("x", MojangError::NoProperties);
        assert!(err.source().is_some());
        assert!(UserDataError::ProfileNotFound("x".to_string())
            .source()
            .is_none());
    }
}
