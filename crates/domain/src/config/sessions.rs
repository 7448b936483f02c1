use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session storage
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Directory holding one `<session_id>.json` document per session.
    #[serde(default = "d_state_path")]
    pub state_path: PathBuf,
    /// When false, sessions live in memory only and vanish on restart.
    #[serde(default = "d_true")]
    pub persist: bool,
    /// How often idle per-session locks are pruned.
    #[serde(default = "d_prune_secs")]
    pub lock_prune_interval_secs: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            state_path: d_state_path(),
            persist: true,
            lock_prune_interval_secs: d_prune_secs(),
        }
    }
}

fn d_state_path() -> PathBuf {
    PathBuf::from("./conversations")
}
fn d_true() -> bool {
    true
}
fn d_prune_secs() -> u64 {
    60
}
