use std::sync::RwLock;

use crate::{
    config::{ConfigStore, PROFILE_URN_KEY, TOKEN_KEY},
    types::Token,
};

#[derive(Debug, Default)]
struct Held {
    token: Option<Token>,
    actor: Option<String>,
}

/// Process-wide holder of the bearer token and the actor URN.
///
/// The holder only touches memory. Writing through to the [`ConfigStore`] is
/// the caller's job; the OAuth controller persists on set and the API client
/// persists the invalidation on 401.
#[derive(Debug, Default)]
pub struct TokenHolder {
    held: RwLock<Held>,
}

impl TokenHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the holder from the values persisted in `store`.
    ///
    /// Empty values count as absent; an invalidated token is stored as an
    /// empty `LINKEDIN_TOKEN=` line.
    pub fn from_store(store: &ConfigStore) -> Self {
        let holder = Self::new();
        if let Some(token) = store.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            holder.set_token(Token::new(token));
        }
        if let Some(actor) = store.get(PROFILE_URN_KEY).filter(|a| !a.is_empty()) {
            holder.set_actor(actor);
        }
        holder
    }

    pub fn current_token(&self) -> Option<Token> {
        self.read(|held| held.token.clone())
    }

    pub fn current_actor(&self) -> Option<String> {
        self.read(|held| held.actor.clone())
    }

    pub fn set_token(&self, token: Token) {
        self.write(|held| held.token = Some(token));
    }

    /// Stores `actor` unless one is already held. Returns whether it was stored.
    pub fn set_actor(&self, actor: impl Into<String>) -> bool {
        self.write(|held| {
            if held.actor.is_some() {
                return false;
            }
            held.actor = Some(actor.into());
            true
        })
    }

    pub fn clear_token(&self) {
        self.write(|held| held.token = None);
    }

    fn read<T>(&self, f: impl FnOnce(&Held) -> T) -> T {
        let held = self.held.read().unwrap_or_else(|e| e.into_inner());
        f(&held)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Held) -> T) -> T {
        let mut held = self.held.write().unwrap_or_else(|e| e.into_inner());
        f(&mut held)
    }
}
