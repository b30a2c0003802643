//! Relay errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the token lifecycle and the LinkedIn API client.
///
/// Every variant is a plain return value. None of them ends the process; the
/// api layer turns each one into a JSON response with [`RelayError::status`].
#[derive(Debug, Error)]
pub enum RelayError {
    /// Client credentials are missing from the configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The user or the provider rejected the consent screen.
    #[error("Authorization denied: {description}")]
    OAuthDenied {
        /// Provider error code, e.g. `access_denied`.
        error: String,
        /// Provider supplied description.
        description: String,
    },

    /// The callback carried neither an error nor an authorization code.
    #[error("Missing authorization code")]
    MissingCode,

    /// The callback `state` was absent, unknown, expired or already used.
    #[error("Invalid or expired OAuth state")]
    InvalidState,

    /// The token endpoint answered without an access token.
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    /// No bearer token is held.
    #[error("Not authenticated")]
    Unauthenticated,

    /// LinkedIn answered 401; the held token has been invalidated.
    #[error("Access token expired or revoked")]
    TokenExpired,

    /// LinkedIn answered 403.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Neither an explicit actor nor a stored actor URN is available.
    #[error("Missing actor URN")]
    MissingActor,

    /// Any other non-success answer from LinkedIn.
    #[error("LinkedIn API error {status}: {body}")]
    ExternalApi {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream response body.
        body: String,
    },

    /// A request body or query failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The upstream call failed before a status line was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RelayError {
    /// Short machine readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Configuration(_) => "configuration_error",
            RelayError::OAuthDenied { .. } => "oauth_denied",
            RelayError::MissingCode => "missing_code",
            RelayError::InvalidState => "invalid_state",
            RelayError::TokenExchange(_) => "token_exchange_failed",
            RelayError::Unauthenticated => "not_authenticated",
            RelayError::TokenExpired => "token_expired",
            RelayError::PermissionDenied(_) => "permission_denied",
            RelayError::MissingActor => "missing_actor",
            RelayError::ExternalApi { .. } => "external_api_error",
            RelayError::InvalidInput(_) => "invalid_input",
            RelayError::Http(_) => "upstream_unreachable",
        }
    }

    /// HTTP status the api layer answers with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::OAuthDenied { .. }
            | RelayError::MissingCode
            | RelayError::InvalidState
            | RelayError::MissingActor
            | RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::Unauthenticated | RelayError::TokenExpired => StatusCode::UNAUTHORIZED,
            RelayError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            RelayError::ExternalApi { .. } | RelayError::Http(_) => StatusCode::BAD_GATEWAY,
            RelayError::Configuration(_) | RelayError::TokenExchange(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
