#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use linkedin_relay::{
    api::AppState,
    config::{ConfigStore, Settings},
};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "cid";
pub const CLIENT_SECRET: &str = "csecret";

// Builds a relay wired against the mock LinkedIn server with a store at `path`
// seeded from `lines`.
pub fn relay(server: &MockServer, path: &Path, lines: &[&str]) -> (Arc<ConfigStore>, AppState) {
    let store = Arc::new(ConfigStore::from_lines(
        path,
        lines.iter().map(|l| l.to_string()).collect(),
    ));
    let settings = Settings::with_base_url(&server.uri(), CLIENT_ID, CLIENT_SECRET);
    let state = AppState::new(settings, Arc::clone(&store));
    (store, state)
}
