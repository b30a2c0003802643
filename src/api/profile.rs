use std::sync::Arc;

use axum::{Extension, response::Json};

use crate::{api::AppState, error::RelayError, types::Profile};

pub async fn profile(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Profile>, RelayError> {
    state.api.fetch_profile().await.map(Json)
}
