use std::sync::Arc;

use ta_domain::config::Config;
use ta_domain::language::LanguagePack;
use ta_sessions::SessionStore;

use crate::runtime::ConversationEngine;

/// Shared application state passed to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Immutable language table, loaded once at startup.
    pub languages: Arc<LanguagePack>,
    pub sessions: Arc<SessionStore>,
    pub engine: Arc<ConversationEngine>,
    /// SHA-256 of the API bearer token. `None` = no auth enforced.
    pub api_token_hash: Option<Vec<u8>>,
}
