use std::sync::Arc;

use ta_domain::language::{Language, LanguagePack};
use ta_domain::message::Message;
use ta_domain::profile::{Profile, Turn};

use crate::injection;

/// Assembles the system message and the full message list for one turn.
///
/// Pure: reads the shared language table and the caller's session snapshot,
/// returns owned text.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    pub languages: Arc<LanguagePack>,
    /// Most recent history turns included per call.
    pub history_window: usize,
}

impl PromptBuilder {
    pub fn new(languages: Arc<LanguagePack>, history_window: usize) -> Self {
        Self {
            languages,
            history_window,
        }
    }

    /// Persona block, then the contact directive when a request is
    /// pending, then the profile context line.
    pub fn build_system_message(
        &self,
        language: Language,
        profile: &Profile,
        contact_request_pending: bool,
    ) -> String {
        let row = self.languages.get(language);
        let context = injection::format_profile_context(profile);
        let mut parts: Vec<&str> = vec![row.persona.trim_end()];
        if contact_request_pending {
            parts.push(row.contact_directive.trim_end());
        }
        parts.push(&context);
        parts.join("\n\n")
    }

    /// `[system] + window(history) + [user: new_user_text]`.
    pub fn build_message_list(
        &self,
        system_message: String,
        history: &[Turn],
        new_user_text: &str,
    ) -> Vec<Message> {
        let start = history.len().saturating_sub(self.history_window);
        let window = &history[start..];
        if start > 0 {
            tracing::debug!(
                dropped = start,
                kept = window.len(),
                "history window applied"
            );
        }

        let mut messages = Vec::with_capacity(window.len() + 2);
        messages.push(Message::system(system_message));
        messages.extend(window.iter().map(Message::from));
        messages.push(Message::user(new_user_text));
        messages
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use ta_domain::message::Role;
    use ta_domain::profile::ProfileUpdate;

    fn builder(window: usize) -> PromptBuilder {
        PromptBuilder::new(Arc::new(LanguagePack::builtin()), window)
    }

    #[test]
    fn contact_directive_only_when_pending() {
        let b = builder(20);
        for lang in Language::ALL {
            let row = b.languages.get(lang);
            let profile = Profile::new(lang);

            let idle = b.build_system_message(lang, &profile, false);
            let pending = b.build_system_message(lang, &profile, true);

            assert!(!idle.is_empty());
            assert!(idle.starts_with(row.persona.trim_end()));
            assert!(!idle.contains(row.contact_directive.trim_end()), "{lang}");
            assert!(pending.contains(row.contact_directive.trim_end()), "{lang}");
            assert_eq!(pending.matches(row.contact_directive.trim_end()).count(), 1);
        }
    }

    #[test]
    fn profile_context_is_last_line() {
        let b = builder(20);
        let mut profile = Profile::new(Language::En);
        profile.apply(ProfileUpdate::Destination("Japan".into()));
        let system = b.build_system_message(Language::En, &profile, true);
        let last = system.lines().last().unwrap();
        assert!(last.starts_with(injection::PROFILE_CONTEXT_PREFIX));
        assert!(last.contains("Japan"));
    }

    #[test]
    fn message_list_order() {
        let b = builder(20);
        let history = vec![Turn::user("hi"), Turn::assistant("hello?")];
        let msgs = b.build_message_list("sys".into(), &history, "Bali");
        let roles: Vec<Role> = msgs.iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::System, Role::User, Role::Assistant, Role::User]);
        assert_eq!(msgs[0].content, "sys");
        assert_eq!(msgs[3].content, "Bali");
    }

    #[test]
    fn history_window_keeps_most_recent_turns() {
        let b = builder(3);
        let history: Vec<Turn> = (0..10).map(|i| Turn::user(format!("t{i}"))).collect();
        let msgs = b.build_message_list("sys".into(), &history, "now");
        let contents: Vec<&str> = msgs.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["sys", "t7", "t8", "t9", "now"]);
    }

    #[test]
    fn zero_window_sends_no_history() {
        let b = builder(0);
        let history = vec![Turn::user("old")];
        let msgs = b.build_message_list("sys".into(), &history, "new");
        assert_eq!(msgs.len(), 2);
    }
}
