use std::{collections::HashMap, sync::Mutex};

use chrono::Utc;

use crate::utils;

/// How long an issued OAuth `state` stays acceptable.
pub const STATE_TTL_SECONDS: i64 = 600;
/// Upper bound of pending states; the oldest is evicted beyond it.
pub const MAX_PENDING_STATES: usize = 256;

#[derive(Debug, Default)]
struct Pending {
    issued: HashMap<String, (i64, u64)>,
    next_seq: u64,
}

/// Ledger of OAuth `state` values handed out with authorization URLs.
///
/// A callback is only accepted when it returns a state from this ledger that
/// has not expired. Each state is accepted once. At most
/// [`MAX_PENDING_STATES`] states are pending; issuing more evicts the oldest.
#[derive(Debug, Default)]
pub struct StateManager {
    pending: Mutex<Pending>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh state and records it as pending.
    pub fn issue(&self) -> String {
        let state = utils::generate_state();
        self.add(state.clone());
        state
    }

    pub fn add(&self, state: String) {
        let now = Utc::now().timestamp();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending
            .issued
            .retain(|_, (issued_at, _)| !is_expired(*issued_at, now));

        while pending.issued.len() >= MAX_PENDING_STATES {
            let oldest = pending
                .issued
                .iter()
                .min_by_key(|(_, (_, seq))| *seq)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => pending.issued.remove(&key),
                None => break,
            };
        }

        let seq = pending.next_seq;
        pending.next_seq += 1;
        pending.issued.insert(state, (now, seq));
    }

    pub fn has(&self, state: &str) -> bool {
        let now = Utc::now().timestamp();
        let pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending
            .issued
            .get(state)
            .is_some_and(|(issued_at, _)| !is_expired(*issued_at, now))
    }

    /// Removes `state` from the ledger. True if it was pending and fresh.
    pub fn consume(&self, state: &str) -> bool {
        let now = Utc::now().timestamp();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending
            .issued
            .remove(state)
            .is_some_and(|(issued_at, _)| !is_expired(issued_at, now))
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_expired(issued_at: i64, now: i64) -> bool {
    now - issued_at >= STATE_TTL_SECONDS
}
