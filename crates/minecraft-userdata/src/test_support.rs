//! In-process stand-in for the Mojang APIs

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mojang_api::{normalize_id, ClientConfig};
use serde_json::{json, Value};

use crate::{UserData, UserDataConfig};

pub(crate) const ASTEROIDS_ID: &str = "987111ae0b1947e689e9db260e7ab860";

/// One account known to the fake upstream
#[derive(Clone)]
pub(crate) struct Player {
    name: String,
    id: String,
    session_id: String,
    properties: Value,
}

impl Player {
    pub(crate) fn new(name: &str, id: &str, textures_json: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            session_id: id.to_string(),
            properties: json!([{ "name": "textures", "value": STANDARD.encode(textures_json) }]),
        }
    }

    pub(crate) fn asteroids() -> Self {
        Self::new(
            "AsteroidsMC",
            ASTEROIDS_ID,
            r#"{
                "timestamp": 1650000000000,
                "profileId": "987111ae0b1947e689e9db260e7ab860",
                "profileName": "AsteroidsMC",
                "textures": { "SKIN": { "url": "X" }, "CAPE": { "url": "Y" } }
            }"#,
        )
    }

    pub(crate) fn with_raw_value(mut self, value: &str) -> Self {
        self.properties = json!([{ "name": "textures", "value": value }]);
        self
    }

    pub(crate) fn without_properties(self) -> Self {
        self.with_properties(json!([]))
    }

    pub(crate) fn with_properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }

    /// Make the session server answer with a different player's id
    pub(crate) fn with_session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }
}

type Players = Arc<Vec<Player>>;

async fn lookup(State(players): State<Players>, Path(name): Path<String>) -> Response {
    match players.iter().find(|p| p.name.eq_ignore_ascii_case(&name)) {
        Some(player) => Json(json!({ "id": player.id, "name": player.name })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "path": format!("/users/profiles/minecraft/{name}"),
                "errorMessage": format!("Couldn't find any profile with name {name}")
            })),
        )
            .into_response(),
    }
}

async fn session(State(players): State<Players>, Path(id): Path<String>) -> Response {
    let id = normalize_id(&id);
    match players.iter().find(|p| p.id == id) {
        Some(player) => Json(json!({
            "id": player.session_id,
            "name": player.name,
            "properties": player.properties
        }))
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Serve `players` on an ephemeral port and point a [`UserData`] at it
pub(crate) async fn spawn_upstream(players: Vec<Player>) -> UserData {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            "minecraft_userdata=debug,mojang_api=debug",
        ))
        .with_test_writer()
        .try_init();

    let router = Router::new()
        .route("/users/profiles/minecraft/{name}", get(lookup))
        .route("/session/minecraft/profile/{id}", get(session))
        .with_state(Arc::new(players));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let base = format!("http://{addr}");
    let config = UserDataConfig {
        mojang: ClientConfig::with_urls(&base, &base),
        ..Default::default()
    };
    UserData::with_config(config).unwrap()
}
