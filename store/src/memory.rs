use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, StoredSession};

/// In-memory SessionStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<StoredSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<StoredSession> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StoredUser;

    fn session(token: &str) -> StoredSession {
        StoredSession::new(
            token,
            StoredUser {
                id: "u-1".into(),
                username: "ops".into(),
                name: Some("Operator".into()),
                role: "admin".into(),
            },
        )
    }

    #[test]
    fn save_load_clear_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&session("tok-a"));
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok-a");
        assert_eq!(loaded.user.username, "ops");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_replaces_previous_session() {
        let store = MemoryStore::new();
        store.save(&session("tok-a"));
        store.save(&session("tok-b"));
        assert_eq!(store.load().unwrap().token, "tok-b");
    }

    #[test]
    fn clear_on_empty_store_is_a_noop() {
        let store = MemoryStore::new();
        store.clear();
        assert!(store.load().is_none());
    }
}
