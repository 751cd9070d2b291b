//! Rust client for the Mojang player APIs
//!
//! Covers the two public, unauthenticated endpoints needed to look a player up:
//!
//! - `GET /users/profiles/minecraft/{username}` on `api.mojang.com` - username to UUID
//! - `GET /session/minecraft/profile/{id}` on `sessionserver.mojang.com` - UUID to
//!   name and signed texture property
//!
//! plus decoding of the base64 texture property into a [`TexturePayload`].
//!
//! # Example
//!
//! ```no_run
//! use mojang_api::{decode_textures, MojangClient};
//!
//! # async fn example() -> Result<(), mojang_api::MojangError> {
//! let client = MojangClient::new()?;
//! let identity = client.lookup_username("AsteroidsMC").await?;
//! let profile = client.session_profile(&identity.id).await?;
//! let textures = decode_textures(&profile)?;
//! if let Some(skin) = textures.textures.skin {
//!     println!("{} wears {}", identity.name, skin.url);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod textures;
mod types;

pub use client::MojangClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_SESSION_URL};
pub use error::{MojangError, Result};
pub use textures::{decode_texture_value, decode_textures};
pub use types::{
    normalize_id, CapeTexture, Identity, ProfileProperty, SessionProfile, SkinMetadata,
    SkinTexture, TexturePayload, Textures,
};
