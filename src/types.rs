use serde::{Deserialize, Serialize};

/// Bearer token obtained from the code exchange.
///
/// `expires_in` is the lifetime hint the provider sent with the token. It is
/// reported back to the caller but never used to expire the token; the token
/// stays valid until LinkedIn answers 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_in: Option<u64>,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_in: None,
        }
    }
}

/// Body of the token endpoint answer.
///
/// Every field is optional so a body without `access_token` can be reported
/// as a failed exchange instead of a decoding error.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Query parameters LinkedIn appends to the redirect URI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Outcome of the profile lookup that follows a successful code exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfileLookup {
    /// The lookup yielded a subject; `actor` is the URN now held.
    Resolved { actor: String },
    /// The lookup failed or was not needed. The token is still usable.
    Skipped { reason: String },
}

/// Answer of a successful OAuth callback.
#[derive(Debug, Clone, Serialize)]
pub struct CallbackSummary {
    /// Redacted access token.
    pub token: String,
    pub actor: Option<String>,
    pub expires_in: Option<u64>,
    pub profile: ProfileLookup,
}

/// `/userinfo` answer (OpenID Connect).
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoResponse {
    pub sub: String,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
}

/// Legacy `/me` answer.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyProfileResponse {
    pub id: String,
    #[serde(rename = "localizedFirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "localizedLastName")]
    pub last_name: Option<String>,
}

/// The profile shapes LinkedIn may answer with.
#[derive(Debug, Clone)]
pub enum ProfilePayload {
    UserInfo(UserInfoResponse),
    Legacy(LegacyProfileResponse),
}

/// Profile normalized from either upstream shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Member id; `sub` for `/userinfo`, `id` for `/me`.
    pub id: String,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
}

impl From<ProfilePayload> for Profile {
    fn from(payload: ProfilePayload) -> Self {
        match payload {
            ProfilePayload::UserInfo(info) => {
                let name = info
                    .name
                    .or_else(|| compose_name(&info.given_name, &info.family_name));
                Profile {
                    id: info.sub,
                    name,
                    given_name: info.given_name,
                    family_name: info.family_name,
                    email: info.email,
                }
            }
            ProfilePayload::Legacy(me) => Profile {
                id: me.id,
                name: compose_name(&me.first_name, &me.last_name),
                given_name: me.first_name,
                family_name: me.last_name,
                email: None,
            },
        }
    }
}

fn compose_name(given: &Option<String>, family: &Option<String>) -> Option<String> {
    let parts: Vec<&str> = [given, family]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Body of `POST /comments` on the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    /// URN of the object being commented on, e.g. `urn:li:activity:42`.
    pub target: String,
    pub text: String,
    /// Overrides the stored actor URN.
    pub actor: Option<String>,
}

/// Body sent to LinkedIn's comments sub-resource.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub actor: String,
    pub object: String,
    pub message: CommentMessage,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentMessage {
    pub text: String,
}

/// Answer of a successful comment creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResult {
    /// Comment id from the `x-restli-id` header, if LinkedIn sent one.
    pub id: Option<String>,
    pub text: String,
    pub target: String,
    pub actor: String,
}

/// Answer of `GET /auth/status`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub actor: Option<String>,
}
