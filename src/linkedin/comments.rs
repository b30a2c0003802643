use reqwest::StatusCode;

use crate::{
    error::{RelayError, Result},
    linkedin::{ApiClient, RESTLI_ID_HEADER, RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION},
    types::{CommentMessage, CommentPayload, CommentResult},
};

impl ApiClient {
    /// Creates a comment on `target` as `actor`, or as the stored actor.
    ///
    /// Posts `{actor, object, message: {text}}` to
    /// `socialActions/{target}/comments`, with the target URN URL-encoded
    /// into the path.
    ///
    /// # Arguments
    ///
    /// * `target` - URN of the post or activity, e.g. `urn:li:activity:42`
    /// * `text` - Comment text
    /// * `actor` - Explicit actor URN; falls back to the held actor when `None`
    ///   or blank
    ///
    /// # Returns
    ///
    /// - `Ok(CommentResult)` - Echoed text and URNs, plus the comment id from
    ///   the `x-restli-id` header when LinkedIn sends one
    /// - `Err(RelayError::Unauthenticated)` - No token is held
    /// - `Err(RelayError::MissingActor)` - No actor available; nothing was sent
    /// - `Err(RelayError::TokenExpired)` - 401; the held token is invalidated
    /// - `Err(RelayError::PermissionDenied)` - 403
    /// - `Err(RelayError::ExternalApi)` - Any other non-success answer
    ///
    /// # Example
    ///
    /// ```
    /// let result = client
    ///     .post_comment("urn:li:activity:42", "nice post", None)
    ///     .await?;
    /// println!("created comment {:?} as {}", result.id, result.actor);
    /// ```
    pub async fn post_comment(
        &self,
        target: &str,
        text: &str,
        actor: Option<&str>,
    ) -> Result<CommentResult> {
        let token = self.bearer()?;
        let actor = actor
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .or_else(|| self.holder().current_actor())
            .ok_or(RelayError::MissingActor)?;

        let result = self.send_comment(&token, target, text, actor).await;
        self.expire_on_unauthorized(result).await
    }

    async fn send_comment(
        &self,
        token: &str,
        target: &str,
        text: &str,
        actor: String,
    ) -> Result<CommentResult> {
        let url = format!(
            "{api}/socialActions/{target}/comments",
            api = self.api_url,
            target = urlencoding::encode(target)
        );
        let payload = CommentPayload {
            actor: actor.clone(),
            object: target.to_string(),
            message: CommentMessage {
                text: text.to_string(),
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION)
            .json(&payload)
            .send()
            .await?;

        if response.status() == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::PermissionDenied(body));
        }

        let response = self.check(response).await?;
        let id = response
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(CommentResult {
            id,
            text: text.to_string(),
            target: target.to_string(),
            actor,
        })
    }
}
