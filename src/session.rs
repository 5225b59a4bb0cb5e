use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

/// Locally persisted authentication state.
///
/// Created on login, updated on refresh, destroyed on logout or on an
/// unrecoverable refresh failure. The `user` record is opaque to the client;
/// it is stored as received and handed back to callers unparsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<serde_json::Value>,
}

impl Session {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token.is_none() && self.refresh_token.is_none() && self.user.is_none()
    }
}

/// Storage seam for the session. Injected into the client rather than read
/// from a global, so embedders and tests can substitute their own backing.
///
/// All accesses happen synchronously; the client never holds a store borrow
/// across an await point.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<Session>;
    fn save(&self, session: &Session) -> Result<()>;
    /// Removes all three persisted fields.
    fn clear(&self) -> Result<()>;
}

/// In-process store for tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Session>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { inner: RwLock::new(session) }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Session> {
        Ok(self.inner.read().map_err(|e| ApiError::Store(e.to_string()))?.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.inner.write().map_err(|e| ApiError::Store(e.to_string()))? = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.save(&Session::default())
    }
}

/// JSON file on disk, the CLI counterpart of the dashboard's browser-local
/// storage. A missing or corrupt file reads as an empty session rather than
/// an error, so a fresh checkout starts logged out instead of broken.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Session> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(ApiError::Store(e.to_string())),
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string_pretty(session).map_err(|e| ApiError::Store(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| ApiError::Store(e.to_string()))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Store(e.to_string())),
        }
    }
}
