//! TOML-file session store for the desktop build.

use std::fs;
use std::path::PathBuf;

use crate::session::{SessionStore, StoredSession};

const SESSION_FILE: &str = "session.toml";

/// SessionStore over a TOML file in the user config directory
/// (`<config-dir>/dealdeck/session.toml`).
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dealdeck");
        Self { dir }
    }

    /// Store rooted at an explicit directory, used by tests.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<StoredSession> {
        let raw = fs::read_to_string(self.path()).ok()?;
        toml::from_str(&raw).ok()
    }

    fn save(&self, session: &StoredSession) {
        let Ok(raw) = toml::to_string_pretty(session) else {
            return;
        };
        let _ = fs::create_dir_all(&self.dir);
        let _ = fs::write(self.path(), raw);
    }

    fn clear(&self) {
        let _ = fs::remove_file(self.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StoredUser;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dealdeck-store-test-{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn roundtrip_through_file() {
        let store = FileStore::at(temp_dir("roundtrip"));
        assert!(store.load().is_none());

        let session = StoredSession::new(
            "tok-file",
            StoredUser {
                id: "u-2".into(),
                username: "night-ops".into(),
                name: None,
                role: "viewer".into(),
            },
        );
        store.save(&session);
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_file_reads_as_no_session() {
        let dir = temp_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SESSION_FILE), "not = [valid").unwrap();

        let store = FileStore::at(dir);
        assert!(store.load().is_none());
    }
}
