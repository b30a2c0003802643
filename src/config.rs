//! Configuration management for the LinkedIn relay.
//!
//! The relay keeps its configuration and its OAuth results in one flat,
//! human-editable `KEY=VALUE` file. [`ConfigStore`] owns that file: it loads a
//! snapshot at startup, answers lookups from the snapshot and rewrites the
//! whole file on every update. [`Settings`] is the resolved view the relay
//! runs with.
//!
//! Lookups follow a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. The `.env` file handled by [`ConfigStore`]
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, sync::Mutex};

use crate::{info, warning};

pub const CLIENT_ID_KEY: &str = "LINKEDIN_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "LINKEDIN_CLIENT_SECRET";
pub const REDIRECT_URI_KEY: &str = "LINKEDIN_REDIRECT_URI";
pub const TOKEN_KEY: &str = "LINKEDIN_TOKEN";
pub const PROFILE_URN_KEY: &str = "LINKEDIN_PROFILE_URN";
pub const SCOPE_KEY: &str = "LINKEDIN_SCOPE";
pub const AUTH_URL_KEY: &str = "LINKEDIN_AUTH_URL";
pub const TOKEN_URL_KEY: &str = "LINKEDIN_TOKEN_URL";
pub const API_URL_KEY: &str = "LINKEDIN_API_URL";
pub const SERVER_ADDRESS_KEY: &str = "SERVER_ADDRESS";

const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/auth/callback";
const DEFAULT_SCOPE: &str = "openid profile email w_member_social";
const DEFAULT_AUTH_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
const DEFAULT_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const DEFAULT_API_URL: &str = "https://api.linkedin.com/v2";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Flat `KEY=VALUE` file used as configuration and token storage.
///
/// Reads are served from an in-memory snapshot of the file's lines. Writes
/// update the snapshot and then rewrite the whole file. Lines that are not
/// `KEY=VALUE` pairs (comments, blanks) are kept verbatim.
///
/// There is no file locking. A single relay process is assumed to be the only
/// writer; writes from within the process are serialized.
pub struct ConfigStore {
    path: PathBuf,
    lines: Mutex<Vec<String>>,
    write_lock: tokio::sync::Mutex<()>,
}

impl ConfigStore {
    /// Loads the store from `path`.
    ///
    /// A file that cannot be read yields an empty store. The failure is
    /// logged and the relay keeps running on in-memory state; the file is
    /// created by the first [`ConfigStore::set`].
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lines = match async_fs::read_to_string(&path).await {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(e) => {
                warning!("Cannot read config file {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self::from_lines(path, lines)
    }

    /// Builds a store from already known lines without touching the disk.
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines: Mutex::new(lines),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Default location of the config file.
    ///
    /// - Linux: `~/.local/share/linkedin-relay/.env`
    /// - macOS: `~/Library/Application Support/linkedin-relay/.env`
    /// - Windows: `%LOCALAPPDATA%/linkedin-relay/.env`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("linkedin-relay/.env");
        path
    }

    /// Returns the value stored under `key`, if any.
    ///
    /// Hand-written values are trimmed and surrounding single quotes are
    /// stripped. Double-quoted values are unescaped, which is how
    /// [`ConfigStore::set`] writes values that would not survive a plain
    /// `KEY=VALUE` line.
    pub fn get(&self, key: &str) -> Option<String> {
        let prefix = format!("{key}=");
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines
            .iter()
            .find_map(|line| line.strip_prefix(&prefix))
            .map(decode_value)
    }

    /// Upserts `key=value` and rewrites the file.
    ///
    /// The first line starting with `key=` is replaced in place; otherwise the
    /// pair is appended. The snapshot is always updated, and a later
    /// [`ConfigStore::get`] returns `value` unchanged. Values with padding,
    /// surrounding quotes or line breaks are written double-quoted and
    /// escaped, so one entry always stays on one line.
    ///
    /// # Arguments
    ///
    /// * `key` - Config key, e.g. `LINKEDIN_TOKEN`
    /// * `value` - Value to store; an empty string marks the key as cleared
    ///
    /// # Error Handling
    ///
    /// A failed write is logged with `warning!` and swallowed. The in-memory
    /// snapshot keeps the new value, so the running relay is unaffected.
    ///
    /// # Example
    ///
    /// ```
    /// let store = ConfigStore::load(ConfigStore::default_path()).await;
    /// store.set("LINKEDIN_TOKEN", "AQX...").await;
    /// assert_eq!(store.get("LINKEDIN_TOKEN").as_deref(), Some("AQX..."));
    /// ```
    pub async fn set(&self, key: &str, value: &str) {
        let _guard = self.write_lock.lock().await;

        let content = {
            let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
            upsert(&mut lines, key, &encode_value(value));
            render(&lines)
        };

        if let Err(e) = self.write(content).await {
            warning!("Cannot write config file {}: {}", self.path.display(), e);
        }
    }

    async fn write(&self, content: String) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        async_fs::write(&self.path, content).await
    }
}

fn upsert(lines: &mut Vec<String>, key: &str, value: &str) {
    let prefix = format!("{key}=");
    let entry = format!("{key}={value}");
    match lines.iter_mut().find(|line| line.starts_with(&prefix)) {
        Some(line) => *line = entry,
        None => lines.push(entry),
    }
}

fn render(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
}

fn encode_value(value: &str) -> String {
    let needs_quotes = value != value.trim()
        || value.starts_with(['"', '\''])
        || value.ends_with(['"', '\''])
        || value.contains(['\n', '\r']);
    if !needs_quotes {
        return value.to_string();
    }

    let mut encoded = String::with_capacity(value.len() + 2);
    encoded.push('"');
    for c in value.chars() {
        match c {
            '"' => encoded.push_str("\\\""),
            '\\' => encoded.push_str("\\\\"),
            '\n' => encoded.push_str("\\n"),
            '\r' => encoded.push_str("\\r"),
            c => encoded.push(c),
        }
    }
    encoded.push('"');
    encoded
}

fn decode_value(raw: &str) -> String {
    let value = raw.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return unescape(&value[1..value.len() - 1]);
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Resolved runtime settings.
///
/// Fields with a default are always present. Client credentials stay
/// optional; the OAuth controller reports their absence when a handshake is
/// started.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: String,
}

impl Settings {
    /// Resolves settings from the environment, then `store`, then defaults.
    pub fn from_store(store: &ConfigStore) -> Self {
        let settings = Self {
            client_id: lookup(store, CLIENT_ID_KEY),
            client_secret: lookup(store, CLIENT_SECRET_KEY),
            redirect_uri: lookup_or(store, REDIRECT_URI_KEY, DEFAULT_REDIRECT_URI),
            scope: lookup_or(store, SCOPE_KEY, DEFAULT_SCOPE),
            auth_url: lookup_or(store, AUTH_URL_KEY, DEFAULT_AUTH_URL),
            token_url: lookup_or(store, TOKEN_URL_KEY, DEFAULT_TOKEN_URL),
            api_url: lookup_or(store, API_URL_KEY, DEFAULT_API_URL),
            server_addr: lookup_or(store, SERVER_ADDRESS_KEY, DEFAULT_SERVER_ADDRESS),
        };

        if settings.client_id.is_none() || settings.client_secret.is_none() {
            info!(
                "{} or {} not set; /auth will fail until both are configured",
                CLIENT_ID_KEY, CLIENT_SECRET_KEY
            );
        }

        settings
    }

    /// Settings pointing every LinkedIn endpoint below `base_url`.
    ///
    /// Handy for local fakes of the provider.
    pub fn with_base_url(base_url: &str, client_id: &str, client_secret: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client_id: Some(client_id.to_string()),
            client_secret: Some(client_secret.to_string()),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: format!("{base}/oauth/v2/authorization"),
            token_url: format!("{base}/oauth/v2/accessToken"),
            api_url: format!("{base}/v2"),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
        }
    }
}

fn lookup(store: &ConfigStore, key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| store.get(key).filter(|v| !v.is_empty()))
}

fn lookup_or(store: &ConfigStore, key: &str, default: &str) -> String {
    lookup(store, key).unwrap_or_else(|| default.to_string())
}
