// src/credentials.rs
//
// The bearer token is issued elsewhere (login/register) and only read here.
// Storage is synchronous and cheap; the poll session consults it on every
// activation so a token cleared mid-session stops the loop on the next tick.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory store, used by tests and short-lived tools.
#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Token persisted to a file, surviving restarts. Read failures are treated
/// as "no credential" rather than surfaced; write failures are logged.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileStore {
    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!(error = ?e, path = %self.path.display(), "failed to persist token");
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!(error = ?e, path = %self.path.display(), "failed to clear token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());
        store.set("tok-123");
        assert_eq!(store.get().as_deref(), Some("tok-123"));
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn file_store_round_trip_and_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("token"));
        assert!(store.get().is_none());

        store.set("tok-456");
        assert_eq!(store.get().as_deref(), Some("tok-456"));

        store.clear();
        assert!(store.get().is_none());
        // Clearing twice is a no-op.
        store.clear();
    }

    #[test]
    fn file_store_ignores_blank_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileStore::new(path);
        assert!(store.get().is_none());
    }
}
