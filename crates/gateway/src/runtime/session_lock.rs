//! Per-session turn serialization.
//!
//! A turn holds its session's permit from extraction to persistence, so
//! two messages for the same session id never interleave. A second message
//! waits for the first to finish.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// One `Semaphore(1)` per session id.
#[derive(Default)]
pub struct SessionLockMap {
    locks: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl SessionLockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `session_id`. The permit releases on drop.
    pub async fn acquire(&self, session_id: &str) -> Result<OwnedSemaphorePermit, SessionBusy> {
        let sem = self
            .locks
            .lock()
            .entry(session_id.to_owned())
            .or_insert_with(|| Arc::new(Semaphore::new(1)))
            .clone();

        sem.acquire_owned().await.map_err(|_| SessionBusy)
    }

    pub fn session_count(&self) -> usize {
        self.locks.lock().len()
    }

    /// Drop locks nobody holds or waits on. Returns how many were removed.
    pub fn prune_idle(&self) -> usize {
        let mut locks = self.locks.lock();
        let before = locks.len();
        // A held permit or a queued waiter keeps its own Arc clone alive.
        locks.retain(|_, sem| Arc::strong_count(sem) > 1);
        before - locks.len()
    }
}

/// The session's lock was closed while waiting.
#[derive(Debug, thiserror::Error)]
#[error("session lock unavailable")]
pub struct SessionBusy;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn distinct_sessions_do_not_block_each_other() {
        let map = SessionLockMap::new();
        let _a = map.acquire("a").await.unwrap();
        let _b = map.acquire("b").await.unwrap();
        assert_eq!(map.session_count(), 2);
    }

    #[tokio::test]
    async fn second_turn_waits_for_the_first() {
        let map = Arc::new(SessionLockMap::new());
        let first = map.acquire("s1").await.unwrap();

        let map2 = map.clone();
        let waiter = tokio::spawn(async move {
            let _p = map2.acquire("s1").await.unwrap();
        });

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!waiter.is_finished());

        drop(first);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn prune_keeps_held_locks() {
        let map = SessionLockMap::new();
        let held = map.acquire("busy").await.unwrap();
        drop(map.acquire("idle").await.unwrap());

        assert_eq!(map.prune_idle(), 1);
        assert_eq!(map.session_count(), 1);

        drop(held);
        assert_eq!(map.prune_idle(), 1);
        assert_eq!(map.session_count(), 0);
    }
}
