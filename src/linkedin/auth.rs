use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::{ConfigStore, PROFILE_URN_KEY, Settings, TOKEN_KEY},
    error::{RelayError, Result},
    info,
    linkedin::ApiClient,
    management::{StateManager, TokenHolder},
    success,
    types::{CallbackParams, CallbackSummary, ProfileLookup, Token, TokenResponse},
    utils, warning,
};

/// Drives the OAuth 2.0 authorization-code handshake with LinkedIn.
///
/// # Flow
///
/// 1. [`OAuthController::authorization_url`] registers a fresh `state` and
///    returns the consent URL the browser is redirected to.
/// 2. LinkedIn redirects back with `code` and `state` (or `error`).
/// 3. [`OAuthController::handle_callback`] verifies the state, exchanges the
///    code at the token endpoint, stores the token in the [`TokenHolder`] and
///    the [`ConfigStore`], then tries to resolve the actor URN.
///
/// The actor lookup is best effort. Its outcome is reported in
/// [`CallbackSummary::profile`] and never fails the callback.
pub struct OAuthController {
    settings: Settings,
    http: Client,
    holder: Arc<TokenHolder>,
    store: Arc<ConfigStore>,
    api: Arc<ApiClient>,
    states: StateManager,
}

impl OAuthController {
    pub fn new(
        settings: Settings,
        holder: Arc<TokenHolder>,
        store: Arc<ConfigStore>,
        api: Arc<ApiClient>,
    ) -> Self {
        Self {
            settings,
            http: Client::new(),
            holder,
            store,
            api,
            states: StateManager::new(),
        }
    }

    pub fn states(&self) -> &StateManager {
        &self.states
    }

    /// Builds the consent URL and registers its `state`.
    ///
    /// Fails with [`RelayError::Configuration`] when the client id or secret
    /// is not configured.
    pub fn authorization_url(&self) -> Result<String> {
        let (client_id, _) = self.credentials()?;
        let state = self.states.issue();

        Ok(format!(
            "{auth_url}?response_type=code&client_id={client_id}&redirect_uri={redirect_uri}&state={state}&scope={scope}",
            auth_url = self.settings.auth_url,
            client_id = urlencoding::encode(client_id),
            redirect_uri = urlencoding::encode(&self.settings.redirect_uri),
            state = state,
            scope = urlencoding::encode(&self.settings.scope),
        ))
    }

    /// Completes the handshake for the parameters LinkedIn redirected with.
    ///
    /// Checks run in order: provider error, missing code, unknown or expired
    /// `state`. Nothing is mutated unless the code exchange succeeds. After
    /// it does, the token is held and written to `LINKEDIN_TOKEN`, then the
    /// actor URN is looked up with the new token.
    ///
    /// # Arguments
    ///
    /// * `params` - `code`, `state`, `error` and `error_description` from the
    ///   redirect query
    ///
    /// # Returns
    ///
    /// - `Ok(CallbackSummary)` - Redacted token, held actor, lifetime hint and
    ///   the outcome of the actor lookup. A failed lookup is reported as
    ///   [`ProfileLookup::Skipped`] and leaves the new token in place
    /// - `Err(RelayError::OAuthDenied)` - LinkedIn redirected with `error`
    /// - `Err(RelayError::MissingCode)` - No `code` in the redirect
    /// - `Err(RelayError::InvalidState)` - `state` was not issued here, has
    ///   expired or was already used
    /// - `Err(RelayError::TokenExchange)` - The token endpoint refused the code
    ///
    /// # Example
    ///
    /// ```
    /// let summary = controller.handle_callback(params).await?;
    /// if let ProfileLookup::Resolved { actor } = &summary.profile {
    ///     println!("authorized as {}", actor);
    /// }
    /// ```
    pub async fn handle_callback(&self, params: CallbackParams) -> Result<CallbackSummary> {
        if let Some(error) = params.error {
            let description = params
                .error_description
                .unwrap_or_else(|| "authorization was not granted".to_string());
            warning!("LinkedIn denied authorization: {} ({})", error, description);
            return Err(RelayError::OAuthDenied { error, description });
        }

        let Some(code) = params.code.filter(|c| !c.is_empty()) else {
            return Err(RelayError::MissingCode);
        };

        match params.state.as_deref() {
            Some(state) if self.states.consume(state) => {}
            _ => return Err(RelayError::InvalidState),
        }

        let token = self.exchange_code(&code).await?;
        self.holder.set_token(token.clone());
        self.store.set(TOKEN_KEY, &token.access_token).await;
        success!(
            "Access token acquired ({})",
            utils::redact_token(&token.access_token)
        );

        let profile = self.resolve_actor(&token.access_token).await;

        Ok(CallbackSummary {
            token: utils::redact_token(&token.access_token),
            actor: self.holder.current_actor(),
            expires_in: token.expires_in,
            profile,
        })
    }

    /// Exchanges an authorization code for a bearer token.
    async fn exchange_code(&self, code: &str) -> Result<Token> {
        let (client_id, client_secret) = self.credentials()?;

        let response = self
            .http
            .post(&self.settings.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<TokenResponse>(&body).ok();

        if !status.is_success() {
            let reason = parsed
                .and_then(|json| json.error_description.or(json.error))
                .unwrap_or_else(|| format!("token endpoint answered {status}: {body}"));
            return Err(RelayError::TokenExchange(reason));
        }

        let json = parsed.ok_or_else(|| {
            RelayError::TokenExchange(format!("token endpoint answered {status}: {body}"))
        })?;

        match json.access_token.filter(|t| !t.is_empty()) {
            Some(access_token) => Ok(Token {
                access_token,
                expires_in: json.expires_in,
            }),
            None => {
                let reason = json
                    .error_description
                    .or(json.error)
                    .unwrap_or_else(|| format!("no access_token in response ({status})"));
                Err(RelayError::TokenExchange(reason))
            }
        }
    }

    /// Looks up the member behind the new token and records its actor URN.
    ///
    /// Any failure, a 401 included, only skips the URN; the token stays held.
    async fn resolve_actor(&self, access_token: &str) -> ProfileLookup {
        let profile = match self.api.lookup_profile(access_token).await {
            Ok(profile) => profile,
            Err(e) => {
                warning!("Skipping actor URN resolution: {}", e);
                return ProfileLookup::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        if profile.id.is_empty() {
            return ProfileLookup::Skipped {
                reason: "profile has no subject".to_string(),
            };
        }

        let actor = utils::person_urn(&profile.id);
        if self.holder.set_actor(actor.clone()) {
            self.store.set(PROFILE_URN_KEY, &actor).await;
            info!("Actor URN set to {}", actor);
        }

        ProfileLookup::Resolved {
            actor: self.holder.current_actor().unwrap_or(actor),
        }
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (&self.settings.client_id, &self.settings.client_secret) {
            (Some(id), Some(secret)) => Ok((id.as_str(), secret.as_str())),
            _ => Err(RelayError::Configuration(
                "LINKEDIN_CLIENT_ID and LINKEDIN_CLIENT_SECRET must be set".to_string(),
            )),
        }
    }
}
