use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};

use crate::{
    api::AppState,
    error::RelayError,
    types::{AuthStatus, CallbackParams, CallbackSummary},
};

/// Redirects the browser to LinkedIn's consent screen.
pub async fn authorize(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, RelayError> {
    let url = state.oauth.authorization_url()?;
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<CallbackSummary>, RelayError> {
    state.oauth.handle_callback(params).await.map(Json)
}

pub async fn status(Extension(state): Extension<Arc<AppState>>) -> Json<AuthStatus> {
    Json(AuthStatus {
        authenticated: state.holder.current_token().is_some(),
        actor: state.holder.current_actor(),
    })
}
