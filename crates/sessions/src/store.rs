//! Session store.
//!
//! Sessions live in a `RwLock<HashMap>` keyed by session id. Mutations
//! touch memory only; callers persist explicitly once per turn with
//! [`SessionStore::persist`] / [`SessionStore::persist_async`]. Reads
//! return owned snapshots.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;

use ta_domain::config::SessionsConfig;
use ta_domain::error::PersistenceError;
use ta_domain::language::Language;
use ta_domain::profile::{ProfileUpdate, Session, Turn};
use ta_domain::trace::TraceEvent;

use crate::document::SessionFiles;
use crate::session_id::is_valid_session_id;

pub struct SessionStore {
    files: Option<SessionFiles>,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    /// Store backed by `<dir>/<session_id>.json` documents.
    pub fn open(dir: &Path) -> Result<Self, PersistenceError> {
        let files = SessionFiles::open(dir)?;
        tracing::info!(path = %files.dir().display(), "session store opened");
        Ok(Self {
            files: Some(files),
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            files: None,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &SessionsConfig) -> Result<Self, PersistenceError> {
        if config.persist {
            Self::open(&config.state_path)
        } else {
            Ok(Self::in_memory())
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.files.is_some()
    }

    /// Look up a session held in memory.
    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.read().get(session_id).cloned()
    }

    /// Look up a session in memory, then on disk, without registering it.
    /// Ids that are not valid session ids never reach the filesystem.
    pub fn load(&self, session_id: &str) -> Option<Session> {
        if let Some(session) = self.get(session_id) {
            return Some(session);
        }
        if !is_valid_session_id(session_id) {
            return None;
        }
        self.files.as_ref().and_then(|f| f.load(session_id))
    }

    /// Return the session for `session_id`, loading its document or
    /// creating it with `language` on first contact. Returns `(session, is_new)`.
    pub fn get_or_create(&self, session_id: &str, language: Language) -> (Session, bool) {
        // Fast path: session already in memory.
        if let Some(session) = self.get(session_id) {
            return (session, false);
        }

        let loaded = self.files.as_ref().and_then(|f| f.load(session_id));

        let mut sessions = self.sessions.write();
        // Another caller may have inserted it while we were reading disk.
        if let Some(existing) = sessions.get(session_id) {
            return (existing.clone(), false);
        }
        let is_new = loaded.is_none();
        let session = loaded.unwrap_or_else(|| Session::new(session_id, language));
        sessions.insert(session_id.to_owned(), session.clone());
        drop(sessions);

        TraceEvent::SessionResolved {
            session_id: session_id.to_owned(),
            is_new,
            language: session.profile.language.to_string(),
        }
        .emit();

        (session, is_new)
    }

    /// Append one turn to the history. Returns `false` for unknown sessions.
    pub fn append_turn(&self, session_id: &str, turn: Turn) -> bool {
        self.with_session(session_id, |s| {
            s.history.push(turn);
            true
        })
    }

    /// Apply a profile update. `Contact` is set-once; everything else is
    /// last-write-wins. Returns `true` when the profile changed.
    pub fn update_profile(&self, session_id: &str, update: ProfileUpdate) -> bool {
        self.with_session(session_id, |s| s.profile.apply(update))
    }

    /// Latch `contact_requested`. Refused until the session holds at least
    /// one assistant turn.
    pub fn mark_contact_requested(&self, session_id: &str) -> bool {
        self.with_session(session_id, |s| {
            if s.profile.contact_requested {
                return false;
            }
            if !s.has_assistant_turn() {
                tracing::warn!(session_id, "contact request latched before any assistant turn; ignoring");
                return false;
            }
            s.profile.contact_requested = true;
            true
        })
    }

    /// Latch `contact_saved`. Refused while no contact is recorded.
    pub fn mark_contact_saved(&self, session_id: &str) -> bool {
        self.with_session(session_id, |s| {
            if s.profile.contact_saved || !s.profile.has_contact() {
                return false;
            }
            s.profile.contact_saved = true;
            true
        })
    }

    /// Write the session document. No-op for in-memory stores.
    pub fn persist(&self, session_id: &str) -> Result<(), PersistenceError> {
        match (&self.files, self.get(session_id)) {
            (Some(files), Some(session)) => files.save(&session),
            _ => Ok(()),
        }
    }

    /// Like [`persist`](Self::persist) with the file I/O on the blocking pool.
    pub async fn persist_async(&self, session_id: &str) -> Result<(), PersistenceError> {
        match (&self.files, self.get(session_id)) {
            (Some(files), Some(session)) => files.save_async(session).await,
            _ => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    // ── Private helpers ───────────────────────────────────────────────

    fn with_session<F>(&self, session_id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Session) -> bool,
    {
        let mut sessions = self.sessions.write();
        match sessions.get_mut(session_id) {
            Some(session) => {
                let changed = f(session);
                if changed {
                    session.updated_at = Utc::now();
                }
                changed
            }
            None => false,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_is_set_once() {
        let store = SessionStore::in_memory();
        store.get_or_create("s", Language::En);
        assert!(store.update_profile("s", ProfileUpdate::Contact("a@x.com".into())));
        assert!(!store.update_profile("s", ProfileUpdate::Contact("b@y.com".into())));
        assert_eq!(store.get("s").unwrap().profile.contact.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn destination_overwrites() {
        let store = SessionStore::in_memory();
        store.get_or_create("s", Language::En);
        store.update_profile("s", ProfileUpdate::Destination("France".into()));
        store.update_profile("s", ProfileUpdate::Destination("Japan".into()));
        assert_eq!(store.get("s").unwrap().profile.destination.as_deref(), Some("Japan"));
    }

    #[test]
    fn get_or_create_is_stable() {
        let store = SessionStore::in_memory();
        let (_, first) = store.get_or_create("s", Language::Uk);
        let (session, second) = store.get_or_create("s", Language::En);
        assert!(first);
        assert!(!second);
        // Language is fixed at creation.
        assert_eq!(session.profile.language, Language::Uk);
    }

    #[test]
    fn history_keeps_order() {
        let store = SessionStore::in_memory();
        store.get_or_create("s", Language::En);
        store.append_turn("s", Turn::user("one"));
        store.append_turn("s", Turn::assistant("two"));
        store.append_turn("s", Turn::user("three"));
        let contents: Vec<_> = store
            .get("s")
            .unwrap()
            .history
            .into_iter()
            .map(|t| t.content)
            .collect();
        assert_eq!(contents, ["one", "two", "three"]);
    }

    #[test]
    fn unknown_session_mutations_are_noops() {
        let store = SessionStore::in_memory();
        assert!(!store.append_turn("ghost", Turn::user("hi")));
        assert!(!store.update_profile("ghost", ProfileUpdate::Name("x".into())));
        assert!(store.is_empty());
    }

    #[test]
    fn contact_saved_requires_contact() {
        let store = SessionStore::in_memory();
        store.get_or_create("s", Language::En);
        assert!(!store.mark_contact_saved("s"));
        store.update_profile("s", ProfileUpdate::Contact("555-1234".into()));
        assert!(store.mark_contact_saved("s"));
        assert!(!store.mark_contact_saved("s"));
        assert!(store.get("s").unwrap().profile.contact_saved);
    }

    #[test]
    fn contact_requested_requires_assistant_turn() {
        let store = SessionStore::in_memory();
        store.get_or_create("s", Language::En);
        store.append_turn("s", Turn::user("hi"));
        assert!(!store.mark_contact_requested("s"));
        store.append_turn("s", Turn::assistant("hello?"));
        assert!(store.mark_contact_requested("s"));
        assert!(!store.mark_contact_requested("s"));
    }

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::in_memory();
        store.get_or_create("a", Language::En);
        store.get_or_create("b", Language::En);
        store.update_profile("a", ProfileUpdate::Destination("Bali".into()));
        store.append_turn("a", Turn::user("Bali"));
        let b = store.get("b").unwrap();
        assert!(b.profile.destination.is_none());
        assert!(b.history.is_empty());
    }

    #[test]
    fn in_memory_persist_is_noop() {
        let store = SessionStore::in_memory();
        store.get_or_create("s", Language::En);
        store.persist("s").unwrap();
        assert!(!store.is_persistent());
    }
}
