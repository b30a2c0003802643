use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};

use crate::{
    api::AppState,
    error::RelayError,
    types::{CommentRequest, CommentResult},
};

pub async fn comment(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResult>), RelayError> {
    let target = request.target.trim();
    if target.is_empty() {
        return Err(RelayError::InvalidInput("target must not be empty".to_string()));
    }
    if request.text.trim().is_empty() {
        return Err(RelayError::InvalidInput("text must not be empty".to_string()));
    }

    let result = state
        .api
        .post_comment(target, &request.text, request.actor.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}
