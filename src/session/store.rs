//! Session storage.
//!
//! # Responsibilities
//! - Allocate session identifiers
//! - Hold per-session key/value state
//! - Apply multi-key writes atomically
//! - Purge sessions that have been idle too long
//!
//! # Design Decisions
//! - Storage sits behind the `SessionStore` trait; handlers only ever see a
//!   `SessionHandle` scoped to one identifier
//! - Every read or write refreshes the idle timestamp

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

/// Opaque identifier of one client's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its cookie representation.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

/// Server-held key/value state keyed by session identifier.
pub trait SessionStore: Send + Sync {
    /// Allocate a new, empty session.
    fn create(&self) -> SessionId;

    /// Whether the session is still live.
    fn exists(&self, id: &SessionId) -> bool;

    /// Read one value.
    fn get(&self, id: &SessionId, key: &str) -> Option<String>;

    /// Write one value. Returns false if the session does not exist.
    fn set(&self, id: &SessionId, key: &str, value: String) -> bool;

    /// Write several values as a single step: either all land or none do.
    fn set_many(&self, id: &SessionId, entries: Vec<(&'static str, String)>) -> bool;

    /// Drop the session and every value in it.
    fn destroy(&self, id: &SessionId);

    /// Drop every session idle for longer than `max_idle`. Returns how many.
    fn purge_idle(&self, max_idle: Duration) -> usize;

    /// Number of live sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct SessionEntry {
    values: HashMap<String, String>,
    touched: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            touched: Instant::now(),
        }
    }
}

/// In-process session store.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, SessionEntry>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self) -> SessionId {
        let id = SessionId::generate();
        self.sessions.insert(id, SessionEntry::new());
        id
    }

    fn exists(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    fn get(&self, id: &SessionId, key: &str) -> Option<String> {
        let mut entry = self.sessions.get_mut(id)?;
        entry.touched = Instant::now();
        entry.values.get(key).cloned()
    }

    fn set(&self, id: &SessionId, key: &str, value: String) -> bool {
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.touched = Instant::now();
                entry.values.insert(key.to_string(), value);
                true
            }
            None => false,
        }
    }

    fn set_many(&self, id: &SessionId, entries: Vec<(&'static str, String)>) -> bool {
        // The shard lock is held for the whole batch.
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.touched = Instant::now();
                for (key, value) in entries {
                    entry.values.insert(key.to_string(), value);
                }
                true
            }
            None => false,
        }
    }

    fn destroy(&self, id: &SessionId) {
        self.sessions.remove(id);
    }

    fn purge_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.touched.elapsed() <= max_idle);
        before.saturating_sub(self.sessions.len())
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

/// A session store bound to the session of the current request.
///
/// The request may carry no session (or a stale one); reads then return
/// nothing and writes report failure.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn SessionStore>,
    id: Option<SessionId>,
}

impl SessionHandle {
    pub fn new(store: Arc<dyn SessionStore>, id: Option<SessionId>) -> Self {
        let id = id.filter(|id| store.exists(id));
        Self { store, id }
    }

    /// Start a brand new session, dropping the current one first.
    pub fn restart(&mut self) -> SessionId {
        self.destroy();
        let id = self.store.create();
        self.id = Some(id);
        id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.id.and_then(|id| self.store.get(&id, key))
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> bool {
        match self.id {
            Some(id) => self.store.set(&id, key, value.into()),
            None => false,
        }
    }

    pub fn set_many(&self, entries: Vec<(&'static str, String)>) -> bool {
        match self.id {
            Some(id) => self.store.set_many(&id, entries),
            None => false,
        }
    }

    /// Tear the session down. Safe to call when there is none.
    pub fn destroy(&mut self) {
        if let Some(id) = self.id.take() {
            self.store.destroy(&id);
        }
    }
}
