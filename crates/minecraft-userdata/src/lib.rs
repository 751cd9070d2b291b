//! Minecraft player lookup
//!
//! Resolves usernames and UUIDs against the Mojang APIs, decodes the session
//! profile texture payload into a [`NormalizedProfile`] (skin, cape, slim
//! model) and builds Crafatar image URLs for avatars, renders, skins and capes.
//!
//! # Example
//!
//! ```no_run
//! use minecraft_userdata::UserData;
//!
//! # async fn example() -> Result<(), minecraft_userdata::UserDataError> {
//! let userdata = UserData::new()?;
//!
//! let profile = userdata.get_profile("AsteroidsMC").await?;
//! println!("{}'s skin is {:?}", profile.name, profile.skin);
//!
//! let avatar = userdata.get_avatar_url("AsteroidsMC").await?;
//! println!("{avatar}");
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is cached: every call performs its own request(s).

mod config;
mod error;
mod profile;
#[cfg(test)]
mod test_support;
mod userdata;

pub use config::UserDataConfig;
pub use error::{Result, UserDataError};
pub use profile::{BasicData, NormalizedProfile, TextureModel, NO_CAPE_FOUND};
pub use userdata::UserData;

pub use crafatar_urls::{AssetKind, AssetUrls, Crafatar, DefaultSkin, RenderOptions, UrlError};
pub use mojang_api::{ClientConfig, Identity, MojangClient, MojangError};
