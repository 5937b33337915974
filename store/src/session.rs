//! # Session persistence: bearer token and operator identity
//!
//! The dashboard keeps exactly two pieces of durable client state: the bearer
//! token handed out at login and the operator record that came with it.
//! Everything else (filters, open dialogs, live tiles) is transient component
//! state and is rebuilt on reload.
//!
//! All reads and writes go through the [`SessionStore`] trait, so the same
//! auth flow works against browser `localStorage` on the web build
//! ([`crate::web`]), a TOML file in the user config directory on desktop
//! ([`crate::file`]), or an in-memory map in tests ([`crate::memory`]).
//!
//! The only invariant a stored session carries is "token present implies
//! authenticated": a loaded session is trusted as a logged-in state until the
//! backend rejects the token, at which point the caller clears the store.

use serde::{Deserialize, Serialize};

/// Operator record as persisted alongside the token.
///
/// This mirrors the serialized user object the backend returns at login; it
/// is the storage schema, not the wire schema, and deliberately carries only
/// what the shell needs to render before the first API call resolves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: String,
}

/// A persisted login: bearer token plus the operator it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: StoredUser,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, user: StoredUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Backend-agnostic persistence for the login session.
pub trait SessionStore {
    /// Returns the stored session, or `None` when absent or unreadable.
    fn load(&self) -> Option<StoredSession>;
    /// Persists the session, replacing any previous one.
    fn save(&self, session: &StoredSession);
    /// Removes the stored session. A missing session is not an error.
    fn clear(&self);
}
