//! Crafatar URL builder
//!
//! Builds image URLs for the [Crafatar](https://crafatar.com) avatar and render
//! service from a player UUID. No request is made and the UUID is not checked;
//! the service answers with a default skin for unknown ids.

mod error;

use serde::{Deserialize, Serialize};

pub use error::{Result, UrlError};

pub const DEFAULT_BASE_URL: &str = "https://crafatar.com";

const MAX_AVATAR_SIZE: u32 = 512;
const MAX_RENDER_SCALE: u32 = 10;

/// Image variants served by Crafatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// 2D face
    Avatar,
    HeadRender,
    BodyRender,
    /// Raw skin texture
    Skin,
    /// Raw cape texture
    Cape,
}

impl AssetKind {
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Avatar,
        AssetKind::HeadRender,
        AssetKind::BodyRender,
        AssetKind::Skin,
        AssetKind::Cape,
    ];

    /// Path prefix under the service root
    pub fn path(self) -> &'static str {
        match self {
            AssetKind::Avatar => "avatars",
            AssetKind::HeadRender => "renders/head",
            AssetKind::BodyRender => "renders/body",
            AssetKind::Skin => "skins",
            AssetKind::Cape => "capes",
        }
    }

    fn is_render(self) -> bool {
        matches!(self, AssetKind::HeadRender | AssetKind::BodyRender)
    }
}

/// Built-in skin served when the player has none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultSkin {
    Steve,
    Alex,
}

impl DefaultSkin {
    fn as_param(self) -> &'static str {
        match self {
            DefaultSkin::Steve => "MHF_Steve",
            DefaultSkin::Alex => "MHF_Alex",
        }
    }
}

/// Optional query parameters
///
/// `size` applies to avatars only, `scale` to head and body renders only and
/// `overlay` to both; `default_skin` is accepted everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub size: Option<u32>,
    pub scale: Option<u32>,
    pub overlay: bool,
    pub default_skin: Option<DefaultSkin>,
}

/// Every image URL for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUrls {
    pub avatar: String,
    pub head_render: String,
    pub body_render: String,
    pub skin: String,
    pub cape: String,
}

/// URL builder bound to a Crafatar instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crafatar {
    base_url: String,
}

impl Crafatar {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Use a mirror or self-hosted instance
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plain URL, e.g. `https://crafatar.com/avatars/{id}`
    pub fn url(&self, kind: AssetKind, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            kind.path(),
            urlencoding::encode(id)
        )
    }

    /// URL with query parameters, rejecting options the variant does not take
    pub fn url_with(&self, kind: AssetKind, id: &str, options: &RenderOptions) -> Result<String> {
        let mut params: Vec<String> = Vec::new();

        if let Some(size) = options.size {
            if kind != AssetKind::Avatar {
                return Err(UrlError::Unsupported {
                    option: "size",
                    kind,
                });
            }
            if !(1..=MAX_AVATAR_SIZE).contains(&size) {
                return Err(UrlError::SizeOutOfRange(size));
            }
            params.push(format!("size={size}"));
        }

        if let Some(scale) = options.scale {
            if !kind.is_render() {
                return Err(UrlError::Unsupported {
                    option: "scale",
                    kind,
                });
            }
            if !(1..=MAX_RENDER_SCALE).contains(&scale) {
                return Err(UrlError::ScaleOutOfRange(scale));
            }
            params.push(format!("scale={scale}"));
        }

        if options.overlay {
            if kind != AssetKind::Avatar && !kind.is_render() {
                return Err(UrlError::Unsupported {
                    option: "overlay",
                    kind,
                });
            }
            params.push("overlay".to_string());
        }

        if let Some(default_skin) = options.default_skin {
            params.push(format!("default={}", default_skin.as_param()));
        }

        let url = self.url(kind, id);
        if params.is_empty() {
            Ok(url)
        } else {
            Ok(format!("{url}?{}", params.join("&")))
        }
    }

    pub fn all(&self, id: &str) -> AssetUrls {
        AssetUrls {
            avatar: self.url(AssetKind::Avatar, id),
            head_render: self.url(AssetKind::HeadRender, id),
            body_render: self.url(AssetKind::BodyRender, id),
            skin: self.url(AssetKind::Skin, id),
            cape: self.url(AssetKind::Cape, id),
        }
    }
}

impl Default for Crafatar {
    fn default() -> Self {
        Self::new()
    }
}
