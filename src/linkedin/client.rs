use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};

use crate::{
    config::{ConfigStore, Settings, TOKEN_KEY},
    error::{RelayError, Result},
    management::TokenHolder,
    warning,
};

/// Authenticated client for the LinkedIn REST API.
///
/// Every call reads the bearer token from the shared [`TokenHolder`]. A 401
/// from LinkedIn clears that token and writes the invalidation through to the
/// [`ConfigStore`], so a restart does not pick the rejected token up again.
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    holder: Arc<TokenHolder>,
    store: Arc<ConfigStore>,
}

impl ApiClient {
    pub fn new(settings: &Settings, holder: Arc<TokenHolder>, store: Arc<ConfigStore>) -> Self {
        Self::with_client(Client::new(), settings, holder, store)
    }

    pub fn with_client(
        http: Client,
        settings: &Settings,
        holder: Arc<TokenHolder>,
        store: Arc<ConfigStore>,
    ) -> Self {
        Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            holder,
            store,
        }
    }

    pub fn holder(&self) -> &Arc<TokenHolder> {
        &self.holder
    }

    /// Current access token or [`RelayError::Unauthenticated`].
    pub(crate) fn bearer(&self) -> Result<String> {
        self.holder
            .current_token()
            .map(|token| token.access_token)
            .ok_or(RelayError::Unauthenticated)
    }

    /// Turns a non-success response into an error.
    ///
    /// 401 becomes [`RelayError::TokenExpired`]; everything else becomes
    /// [`RelayError::ExternalApi`] with the upstream status and body. The
    /// held token is not touched here, see [`ApiClient::expire_on_unauthorized`].
    pub(crate) async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(RelayError::TokenExpired);
        }

        Err(external_error(response).await)
    }

    /// Invalidates the held token when `result` is a 401 from LinkedIn.
    pub(crate) async fn expire_on_unauthorized<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(RelayError::TokenExpired) = &result {
            self.invalidate().await;
        }
        result
    }

    async fn invalidate(&self) {
        warning!("LinkedIn rejected the access token; clearing it");
        self.holder.clear_token();
        self.store.set(TOKEN_KEY, "").await;
    }
}

pub(crate) async fn external_error(response: Response) -> RelayError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    RelayError::ExternalApi { status, body }
}
