//! # LinkedIn Integration Module
//!
//! Everything that talks to LinkedIn lives here:
//!
//! - [`auth`] - the OAuth 2.0 authorization-code handshake. Builds the consent
//!   URL, verifies the returned `state`, exchanges the code for a bearer token
//!   and resolves the member's actor URN.
//! - [`client`] - the authenticated API client. Attaches the held token,
//!   invalidates it when LinkedIn answers 401 and maps other failures onto
//!   [`crate::error::RelayError`].
//! - [`profile`] - profile lookup with the `/userinfo` to `/me` fallback.
//! - [`comments`] - comment creation on a post or activity.
//!
//! ## Endpoints
//!
//! - `GET  {auth_url}` - consent screen (browser redirect)
//! - `POST {token_url}` - code exchange, form encoded
//! - `GET  {api_url}/userinfo` - OpenID Connect profile
//! - `GET  {api_url}/me` - legacy profile, Rest.li 2.0
//! - `POST {api_url}/socialActions/{target}/comments` - comment creation, Rest.li 2.0
//!
//! There is no refresh grant. Once LinkedIn rejects the token the user has to
//! run the handshake again.

pub mod auth;
pub mod client;
pub mod comments;
pub mod profile;

pub use auth::OAuthController;
pub use client::ApiClient;

/// Header selecting the Rest.li protocol version on the legacy endpoints.
pub const RESTLI_PROTOCOL_HEADER: &str = "X-Restli-Protocol-Version";
pub const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
/// Response header carrying the id of a created entity.
pub const RESTLI_ID_HEADER: &str = "x-restli-id";
