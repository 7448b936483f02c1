//! One JSON document per session.
//!
//! `<dir>/<session_id>.json` holds the whole [`Session`]: profile plus
//! ordered history. Documents are rewritten in full on every save via a
//! temp file and rename. An unreadable or corrupt document is logged and
//! treated as absent.

use std::path::{Path, PathBuf};

use ta_domain::error::{Error, PersistenceError};
use ta_domain::profile::Session;
use ta_domain::trace::TraceEvent;

const SINK: &str = "sessions";

#[derive(Debug, Clone)]
pub struct SessionFiles {
    dir: PathBuf,
}

impl SessionFiles {
    /// Open (creating if needed) the session directory.
    pub fn open(dir: &Path) -> Result<Self, PersistenceError> {
        std::fs::create_dir_all(dir).map_err(|e| PersistenceError::new(SINK, e))?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{session_id}.json"))
    }

    /// Load a session document. Missing, unreadable and corrupt files all
    /// yield `None`; the latter two are logged.
    pub fn load(&self, session_id: &str) -> Option<Session> {
        read_document(&self.path_for(session_id), session_id)
    }

    pub fn save(&self, session: &Session) -> Result<(), PersistenceError> {
        let buf = serde_json::to_string_pretty(session).map_err(|e| PersistenceError::new(SINK, e))?;
        write_atomic(&self.path_for(&session.session_id), buf.as_bytes())?;

        TraceEvent::SessionPersisted {
            session_id: session.session_id.clone(),
            turns: session.history.len(),
        }
        .emit();
        Ok(())
    }

    /// Like [`save`](Self::save) but runs the file I/O on the blocking pool.
    pub async fn save_async(&self, session: Session) -> Result<(), PersistenceError> {
        let files = self.clone();
        tokio::task::spawn_blocking(move || files.save(&session))
            .await
            .map_err(|e| {
                PersistenceError::new(SINK, Error::Other(format!("spawn_blocking join: {e}")))
            })?
    }
}

fn read_document(path: &Path, session_id: &str) -> Option<Session> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(
                session_id = session_id,
                path = %path.display(),
                error = %e,
                "session document unreadable, starting empty"
            );
            return None;
        }
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(mut session) => {
            // The file name is authoritative.
            session.session_id = session_id.to_owned();
            Some(session)
        }
        Err(e) => {
            tracing::warn!(
                session_id = session_id,
                path = %path.display(),
                error = %e,
                "corrupt session document, starting empty"
            );
            None
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, bytes).map_err(|e| PersistenceError::new(SINK, e))?;
    std::fs::rename(&tmp, path).map_err(|e| PersistenceError::new(SINK, e))?;
    Ok(())
}
