//! localStorage-backed session store for the web build.
//!
//! The token and the serialized user live under separate keys, matching how
//! the browser app has always stored them; either one missing or failing to
//! parse counts as "no session".

use crate::session::{SessionStore, StoredSession, StoredUser};

const TOKEN_KEY: &str = "dealdeck.token";
const USER_KEY: &str = "dealdeck.user";

/// SessionStore over `window.localStorage`.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for WebStore {
    fn load(&self) -> Option<StoredSession> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
        let user: StoredUser = serde_json::from_str(&raw_user).ok()?;
        Some(StoredSession { token, user })
    }

    fn save(&self, session: &StoredSession) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        if let Ok(raw) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
