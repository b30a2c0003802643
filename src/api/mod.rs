//! # API Module
//!
//! HTTP handlers of the relay server. Each handler validates its input, calls
//! into [`crate::linkedin`] and maps the result onto a JSON response.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`authorize`] - `GET /auth`, redirect to LinkedIn's consent screen
//! - [`callback`] - `GET /auth/callback`, completes the handshake
//! - [`status`] - `GET /auth/status`, whether a token and actor are held
//! - [`profile`] - `GET /profile`, the authenticated member's profile
//! - [`comment`] - `POST /comments`, creates a comment
//!
//! Errors are answered as `{ "error": <kind>, "message": <text> }` with the
//! status from [`RelayError::status`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use linkedin_relay::api::{health, profile};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/profile", get(profile));
//! ```

mod auth;
mod comments;
mod health;
mod profile;

use std::sync::Arc;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub use auth::{authorize, callback, status};
pub use comments::comment;
pub use health::health;
pub use profile::profile;

use crate::{
    config::{ConfigStore, Settings},
    error::RelayError,
    linkedin::{ApiClient, OAuthController},
    management::TokenHolder,
};

/// Shared state handed to every handler.
pub struct AppState {
    pub holder: Arc<TokenHolder>,
    pub api: Arc<ApiClient>,
    pub oauth: OAuthController,
}

impl AppState {
    /// Wires the token holder, API client and OAuth controller together.
    ///
    /// The holder is seeded from `store`.
    pub fn new(settings: Settings, store: Arc<ConfigStore>) -> Self {
        let holder = Arc::new(TokenHolder::from_store(&store));
        let api = Arc::new(ApiClient::new(&settings, Arc::clone(&holder), Arc::clone(&store)));
        let oauth = OAuthController::new(settings, Arc::clone(&holder), store, Arc::clone(&api));

        Self { holder, api, oauth }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
