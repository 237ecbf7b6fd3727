//! Durable storage for the signed-in session.
//!
//! The browser backend is origin-scoped `localStorage`; an in-memory
//! backend serves native builds and tests. Storage is a plain cache: no
//! expiry, no encryption, visible to every tab on the same origin. A
//! logout in one tab therefore orphans the in-memory session of another
//! until that tab reloads; that window is accepted.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::state::session::{Session, UserSnapshot};

const TOKEN_KEY: &str = "cc_token";
const USER_KEY: &str = "cc_user";
const JOB_SEEKER_ID_KEY: &str = "cc_jobSeekerId";
const EMPLOYER_ID_KEY: &str = "cc_employerId";

/// Minimal key/value surface over origin-scoped storage.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared in-memory backend. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// `localStorage` backend. Storage failures read as an empty store.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl KeyValue for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The store the running application writes through.
#[cfg(feature = "hydrate")]
pub fn default_store() -> impl KeyValue {
    BrowserStorage
}

/// Outside the browser there is nothing durable to write to; each call
/// yields a fresh, empty store so every operation is an inert no-op.
#[cfg(not(feature = "hydrate"))]
pub fn default_store() -> impl KeyValue {
    MemoryStore::new()
}

/// Persist the session as a unit: token, serialized snapshot, and the two
/// profile-id hints are all written before this returns. The hints are
/// denormalized copies kept under their own keys.
pub fn save<S: KeyValue>(store: &S, token: &str, user: &UserSnapshot) {
    store.set(TOKEN_KEY, token);
    store.set(USER_KEY, &serde_json::to_string(user).unwrap_or_default());
    store.set(JOB_SEEKER_ID_KEY, &hint_value(user.job_seeker_id));
    store.set(EMPLOYER_ID_KEY, &hint_value(user.employer_id));
}

/// Read back the last saved session. A missing token, a missing snapshot,
/// or a snapshot that no longer parses all read as "no session".
pub fn load<S: KeyValue>(store: &S) -> Option<Session> {
    let token = store.get(TOKEN_KEY)?;
    let raw = store.get(USER_KEY)?;
    let mut user: UserSnapshot = serde_json::from_str(&raw).ok()?;

    // The hint keys win over whatever the snapshot carries; an unreadable
    // hint degrades to "no hint", not to "no session".
    user.job_seeker_id = parse_hint(store.get(JOB_SEEKER_ID_KEY));
    user.employer_id = parse_hint(store.get(EMPLOYER_ID_KEY));

    Some(Session { token, user })
}

/// Remove every session-related key.
pub fn clear<S: KeyValue>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    store.remove(JOB_SEEKER_ID_KEY);
    store.remove(EMPLOYER_ID_KEY);
}

/// Bearer token currently in the store, if any. The request pipeline reads
/// this at call time and never caches it.
pub fn token<S: KeyValue>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY)
}

fn hint_value(hint: Option<i64>) -> String {
    hint.map(|id| id.to_string()).unwrap_or_default()
}

fn parse_hint(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}
