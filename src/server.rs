use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, api::AppState, info};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/auth", get(api::authorize))
        .route("/auth/callback", get(api::callback))
        .route("/auth/status", get(api::status))
        .route("/profile", get(api::profile))
        .route("/comments", post(api::comment))
        .layer(Extension(state))
}

pub async fn start_api_server(addr: &str, state: Arc<AppState>) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
