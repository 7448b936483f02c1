//! The per-message pipeline.
//!
//! extract → capture lead → build prompt → complete → normalize → append
//! turns → persist. Every path produces a reply in the session's language.

use std::sync::Arc;

use chrono::Local;
use serde::Serialize;

use ta_domain::language::Language;
use ta_domain::profile::{ContactRecord, ProfileHints, ProfileUpdate, Turn};
use ta_domain::trace::TraceEvent;
use ta_extract::{extract_contact, extract_destination};
use ta_leads::LeadCapture;
use ta_prompt::{normalize, should_request_contact, PromptBuilder};
use ta_providers::CompletionGateway;
use ta_sessions::{resolve_session_id, SessionStore};

use super::session_lock::SessionLockMap;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Input / output
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default)]
pub struct InboundMessage {
    /// Caller-held session id. Missing or malformed ids get a fresh one.
    pub session_id: Option<String>,
    /// Language code for this turn. Missing or unsupported codes select
    /// the default language.
    pub language_hint: Option<String>,
    pub text: String,
    /// Profile fields the caller already knows.
    pub hints: Option<ProfileHints>,
}

impl InboundMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language_hint = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageOutcome {
    pub reply: String,
    pub session_id: String,
    pub language: Language,
    /// A lead from this message reached one of the sinks.
    pub contact_captured: bool,
    /// Destination extracted from this message alone.
    pub detected_destination: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Engine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct ConversationEngine {
    sessions: Arc<SessionStore>,
    prompts: PromptBuilder,
    completion: CompletionGateway,
    leads: Arc<LeadCapture>,
    locks: Arc<SessionLockMap>,
    default_language: Language,
}

impl ConversationEngine {
    pub fn new(
        sessions: Arc<SessionStore>,
        prompts: PromptBuilder,
        completion: CompletionGateway,
        leads: Arc<LeadCapture>,
        default_language: Language,
    ) -> Self {
        Self {
            sessions,
            prompts,
            completion,
            leads,
            locks: Arc::new(SessionLockMap::new()),
            default_language,
        }
    }

    pub fn session_locks(&self) -> &Arc<SessionLockMap> {
        &self.locks
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    pub fn provider_ready(&self) -> bool {
        self.completion.is_ready()
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Run one conversation turn. Never fails: upstream errors become the
    /// localized apology and persistence errors are logged.
    pub async fn handle_message(&self, msg: InboundMessage) -> MessageOutcome {
        let (session_id, minted) = resolve_session_id(msg.session_id.as_deref());
        if minted {
            tracing::debug!(session_id = %session_id, requested = ?msg.session_id, "minted session id");
        }

        let requested_language =
            Language::resolve(msg.language_hint.as_deref(), self.default_language);

        let _permit = match self.locks.acquire(&session_id).await {
            Ok(permit) => permit,
            Err(e) => {
                tracing::error!(session_id = %session_id, error = %e, "could not serialize turn");
                return MessageOutcome {
                    reply: self.prompts.languages.get(requested_language).error_reply(&e),
                    session_id,
                    language: requested_language,
                    contact_captured: false,
                    detected_destination: None,
                };
            }
        };

        self.sessions.get_or_create(&session_id, requested_language);
        self.sessions
            .update_profile(&session_id, ProfileUpdate::Language(requested_language));
        for update in msg.hints.unwrap_or_default().into_updates() {
            self.sessions.update_profile(&session_id, update);
        }

        // ── Extraction ──
        let detected_destination = extract_destination(&msg.text);
        if let Some(ref destination) = detected_destination {
            self.sessions
                .update_profile(&session_id, ProfileUpdate::Destination(destination.clone()));
        }
        let contact_captured = match extract_contact(&msg.text) {
            Some(contact) => self.capture_lead(&session_id, contact).await,
            None => false,
        };

        // ── Prompt + completion ──
        let (session, _) = self.sessions.get_or_create(&session_id, self.default_language);
        let language = session.profile.language;
        let templates = self.prompts.languages.get(language);
        let pending = should_request_contact(&session);

        let system = self
            .prompts
            .build_system_message(language, &session.profile, pending);
        let messages = self
            .prompts
            .build_message_list(system, &session.history, &msg.text);

        let reply = match self.completion.complete(messages).await {
            Ok(raw) => {
                let reply = normalize(
                    &raw,
                    templates,
                    pending,
                    session.profile.destination.as_deref(),
                );
                self.sessions
                    .append_turn(&session_id, Turn::user(msg.text.as_str()));
                self.sessions
                    .append_turn(&session_id, Turn::assistant(reply.as_str()));
                if pending && self.sessions.mark_contact_requested(&session_id) {
                    TraceEvent::ContactRequested {
                        session_id: session_id.clone(),
                        destination: session.profile.destination.clone(),
                    }
                    .emit();
                }
                reply
            }
            Err(e) => {
                tracing::warn!(session_id = %session_id, error = %e, "completion failed");
                TraceEvent::CompletionFailed {
                    session_id: session_id.clone(),
                    language: language.to_string(),
                    error: e.to_string(),
                }
                .emit();
                templates.error_reply(&e)
            }
        };

        if let Err(e) = self.sessions.persist_async(&session_id).await {
            tracing::warn!(session_id = %session_id, error = %e, "session document not written");
        }

        MessageOutcome {
            reply,
            session_id,
            language,
            contact_captured,
            detected_destination,
        }
    }

    /// Record `contact` and hand the lead to the sinks. Returns `true` when
    /// this call saved it.
    async fn capture_lead(&self, session_id: &str, contact: String) -> bool {
        self.sessions
            .update_profile(session_id, ProfileUpdate::Contact(contact.clone()));

        let (session, _) = self.sessions.get_or_create(session_id, self.default_language);
        let profile = &session.profile;
        if profile.contact_saved {
            tracing::debug!(session_id, "lead already captured for this session");
            return false;
        }
        // Contact is set-once; a different value means an earlier,
        // unsaved contact is still the one on record.
        if profile.contact.as_deref() != Some(contact.trim()) {
            tracing::debug!(session_id, "ignoring second contact value");
            return false;
        }
        let Some(record) = ContactRecord::from_profile(profile, Local::now()) else {
            return false;
        };

        self.leads.submit(session_id, &record).await.is_saved()
            && self.sessions.mark_contact_saved(session_id)
    }
}
