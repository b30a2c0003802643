use serde::de::DeserializeOwned;

use crate::{
    error::{RelayError, Result},
    linkedin::{ApiClient, RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION},
    types::{LegacyProfileResponse, Profile, ProfilePayload, UserInfoResponse},
    warning,
};

impl ApiClient {
    /// Fetches the authenticated member's profile with the held token.
    ///
    /// A 401 invalidates the held token and ends with
    /// [`RelayError::TokenExpired`].
    pub async fn fetch_profile(&self) -> Result<Profile> {
        let token = self.bearer()?;
        let result = self.lookup_profile(&token).await;
        self.expire_on_unauthorized(result).await
    }

    /// Looks up the profile behind `token` without touching the held token.
    ///
    /// Asks `/userinfo` first and falls back to the legacy `/me` endpoint
    /// when that fails. A 401 from `/userinfo` is returned as
    /// [`RelayError::TokenExpired`] without trying `/me`.
    pub async fn lookup_profile(&self, token: &str) -> Result<Profile> {
        let payload = match self.fetch_userinfo(token).await {
            Ok(info) => ProfilePayload::UserInfo(info),
            Err(RelayError::TokenExpired) => return Err(RelayError::TokenExpired),
            Err(e) => {
                warning!("userinfo lookup failed ({}); trying legacy profile", e);
                ProfilePayload::Legacy(self.fetch_legacy_profile(token).await?)
            }
        };

        Ok(payload.into())
    }

    async fn fetch_userinfo(&self, token: &str) -> Result<UserInfoResponse> {
        let url = format!("{}/userinfo", self.api_url);
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        self.decode(response).await
    }

    async fn fetch_legacy_profile(&self, token: &str) -> Result<LegacyProfileResponse> {
        let url = format!("{}/me", self.api_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION)
            .send()
            .await?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = self.check(response).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RelayError::ExternalApi {
            status,
            body: format!("unexpected profile shape ({e}): {body}"),
        })
    }
}
