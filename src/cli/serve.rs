use std::{path::PathBuf, sync::Arc};

use crate::{
    api::AppState,
    config::{ConfigStore, Settings},
    error, info,
    server::start_api_server,
    success, warning,
};

/// Runs the relay server until it fails or the process is stopped.
///
/// With `open` set, the local `/auth` endpoint is opened in the default
/// browser once the server task is running, which starts the LinkedIn
/// handshake right away.
pub async fn serve(env_file: Option<PathBuf>, open: bool) {
    let path = env_file.unwrap_or_else(ConfigStore::default_path);
    info!("Using config file {}", path.display());

    let store = Arc::new(ConfigStore::load(path).await);
    let settings = Settings::from_store(&store);
    let addr = settings.server_addr.clone();
    let state = Arc::new(AppState::new(settings, store));

    match (state.holder.current_token(), state.holder.current_actor()) {
        (Some(_), Some(actor)) => success!("Loaded stored access token for {}", actor),
        (Some(_), None) => success!("Loaded stored access token"),
        _ => info!("No access token stored; visit /auth to connect LinkedIn"),
    }

    let server_addr = addr.clone();
    let server = tokio::spawn(async move { start_api_server(&server_addr, state).await });

    if open {
        let auth_url = format!("http://{addr}/auth");
        if webbrowser::open(&auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            )
        }
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server failed: {}", e),
        Err(e) => error!("Server task aborted: {}", e),
    }
}
