//! AppState construction shared by `serve`, `run` and `chat`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sha2::{Digest, Sha256};

use ta_domain::config::{Config, ConfigSeverity};
use ta_domain::language::LanguagePack;
use ta_leads::LeadCapture;
use ta_prompt::PromptBuilder;
use ta_providers::{CompletionGateway, ProviderRegistry};
use ta_sessions::SessionStore;

use crate::runtime::ConversationEngine;
use crate::state::AppState;

/// Validate config, initialize every subsystem and return a wired [`AppState`].
pub fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    // ── Config validation ────────────────────────────────────────────
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => tracing::warn!("config: {issue}"),
            ConfigSeverity::Error => tracing::error!("config: {issue}"),
        }
    }
    let errors = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("config validation failed with {errors} error(s)");
    }

    // ── Language table ───────────────────────────────────────────────
    let languages = Arc::new(
        LanguagePack::load(config.languages.overrides_path.as_deref())
            .context("loading language table")?,
    );
    tracing::info!(
        default_language = %config.conversation.default_language,
        overrides = config.languages.overrides_path.is_some(),
        "language table ready"
    );

    // ── Sessions ─────────────────────────────────────────────────────
    let sessions = Arc::new(
        SessionStore::from_config(&config.sessions).context("opening session store")?,
    );

    // ── LLM ──────────────────────────────────────────────────────────
    let registry =
        ProviderRegistry::from_config(&config.llm).context("initializing LLM providers")?;
    let completion = CompletionGateway::from_registry(&registry, &config.llm);
    tracing::info!(
        providers = registry.len(),
        model = %config.llm.model,
        timeout_ms = config.llm.timeout_ms,
        "completion gateway ready"
    );

    // ── Leads ────────────────────────────────────────────────────────
    let leads = Arc::new(LeadCapture::from_config(&config.leads).context("initializing lead sinks")?);

    let prompts = PromptBuilder::new(languages.clone(), config.conversation.history_window_turns);
    let engine = Arc::new(ConversationEngine::new(
        sessions.clone(),
        prompts,
        completion,
        leads,
        config.conversation.default_language,
    ));

    Ok(AppState {
        api_token_hash: api_token_hash(&config.server.api_token_env),
        config,
        languages,
        sessions,
        engine,
    })
}

/// Read the API token once and keep only its digest.
fn api_token_hash(env_var: &str) -> Option<Vec<u8>> {
    match std::env::var(env_var).ok().filter(|t| !t.is_empty()) {
        Some(token) => {
            tracing::info!(source = %format!("env:{env_var}"), "API bearer-token auth enabled");
            Some(Sha256::digest(token.as_bytes()).to_vec())
        }
        None => {
            tracing::warn!("API bearer-token auth DISABLED; set {env_var} to enable");
            None
        }
    }
}

/// Spawn the periodic session-lock pruning loop.
pub fn spawn_background_tasks(state: &AppState) {
    let locks = state.engine.session_locks().clone();
    let every = Duration::from_secs(state.config.sessions.lock_prune_interval_secs.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let pruned = locks.prune_idle();
            if pruned > 0 {
                tracing::debug!(pruned, remaining = locks.session_count(), "pruned idle session locks");
            }
        }
    });
}
