use std::path::PathBuf;

use crate::{config::ConfigStore, info, management::TokenHolder, success, utils, warning};

/// Prints what the config file currently holds for the handshake.
pub async fn status(env_file: Option<PathBuf>) {
    let store = ConfigStore::load(env_file.unwrap_or_else(ConfigStore::default_path)).await;
    let holder = TokenHolder::from_store(&store);

    match holder.current_token() {
        Some(token) => success!(
            "Access token stored ({})",
            utils::redact_token(&token.access_token)
        ),
        None => warning!("No access token stored. Run the server and visit /auth."),
    }

    match holder.current_actor() {
        Some(actor) => info!("Actor URN: {}", actor),
        None => info!("Actor URN not resolved yet"),
    }
}
