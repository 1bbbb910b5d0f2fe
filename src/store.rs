//! Session store: the single source of truth for one editing session.
//!
//! An ordered collection of sessions with value semantics: `add`,
//! `replace`, and `remove` leave `self` untouched and return a new store.
//! Views and indexes are always re-derived from the current store value,
//! so a rejected edit simply means the caller keeps the old store.
//!
//! There is exactly one concurrent writer (the interaction thread), so no
//! locking exists here. Extending to multiple editors would need a version
//! stamp checked at `replace` time.

use crate::error::{EngineError, EngineResult};
use crate::models::{Session, SessionId};

/// Ordered, immutable session collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a batch of loaded sessions.
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// All sessions in load order.
    pub fn all(&self) -> &[Session] {
        &self.sessions
    }

    /// Looks up a session by identity.
    pub fn by_id(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Returns a new store with `session` appended.
    pub fn add(&self, session: Session) -> SessionStore {
        let mut sessions = self.sessions.clone();
        sessions.push(session);
        Self { sessions }
    }

    /// Returns a new store with the session under `id` replaced.
    ///
    /// The replacement keeps its own `id` field; callers are expected to
    /// construct it from the original so identity is preserved.
    pub fn replace(&self, id: SessionId, new_session: Session) -> EngineResult<SessionStore> {
        let idx = self.index_of(id)?;
        let mut sessions = self.sessions.clone();
        sessions[idx] = new_session;
        Ok(Self { sessions })
    }

    /// Returns a new store without the session under `id`.
    pub fn remove(&self, id: SessionId) -> EngineResult<SessionStore> {
        let idx = self.index_of(id)?;
        let mut sessions = self.sessions.clone();
        sessions.remove(idx);
        Ok(Self { sessions })
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn index_of(&self, id: SessionId) -> EngineResult<usize> {
        self.sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(EngineError::NotFound(id))
    }
}
