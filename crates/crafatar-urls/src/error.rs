use std::fmt;

use crate::AssetKind;

/// Errors from building an image URL with render options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    SizeOutOfRange(u32),
    ScaleOutOfRange(u32),
    Unsupported {
        option: &'static str,
        kind: AssetKind,
    },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange(size) => write!(f, "Avatar size {size} is outside 1..=512"),
            Self::ScaleOutOfRange(scale) => write!(f, "Render scale {scale} is outside 1..=10"),
            Self::Unsupported { option, kind } => {
                write!(f, "Option `{option}` is not supported for {kind:?} images")
            }
        }
    }
}

impl std::error::Error for UrlError {}

pub type Result<T> = std::result::Result<T, UrlError>;
