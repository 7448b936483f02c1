use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::language::Language;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Conversation pipeline
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Language used when a caller sends no hint or an unsupported one.
    #[serde(default)]
    pub default_language: Language,
    /// Only the most recent N turns of history are sent with each
    /// completion call. The session document keeps everything.
    #[serde(default = "d_window")]
    pub history_window_turns: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            history_window_turns: d_window(),
        }
    }
}

fn d_window() -> usize {
    20
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Language table overrides
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// TOML file overlaying the built-in localized text, keyed by language
    /// code (`[de] welcome = "..."`).
    #[serde(default)]
    pub overrides_path: Option<PathBuf>,
}
