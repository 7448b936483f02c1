//! `travel-assistant chat`: the terminal chat UI.
//!
//! Each line goes through the same pipeline as `POST /api/chat`. Slash
//! commands switch language or session and inspect the profile.

use std::sync::Arc;

use ta_domain::config::Config;
use ta_domain::language::{Language, LanguagePack};
use ta_domain::profile::Profile;
use ta_sessions::SessionStore;

use crate::bootstrap;
use crate::runtime::InboundMessage;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Public entry point
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn chat(
    config: Arc<Config>,
    session: Option<String>,
    lang: Option<String>,
) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config.clone())?;
    bootstrap::spawn_background_tasks(&state);

    let history_path = config.sessions.state_path.join(".chat_history");
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut rl = rustyline::DefaultEditor::new()?;
    let _ = rl.load_history(&history_path);

    let mut repl = ReplState {
        session_id: session,
        language: Language::resolve(lang.as_deref(), config.conversation.default_language),
    };

    eprintln!("Travel assistant  |  /help for commands, Ctrl+D to exit");
    eprintln!();
    println!("{}\n", state.languages.get(repl.language).welcome);

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(&line).ok();

                if trimmed.starts_with('/') {
                    match handle_slash_command(trimmed, &mut repl, &state.languages, &state.sessions) {
                        SlashOutcome::Exit => break,
                        SlashOutcome::Continue => continue,
                    }
                }

                let outcome = state
                    .engine
                    .handle_message(InboundMessage {
                        session_id: repl.session_id.clone(),
                        language_hint: Some(repl.language.code().to_string()),
                        text: trimmed.to_string(),
                        hints: None,
                    })
                    .await;
                repl.session_id = Some(outcome.session_id);
                println!("\n{}\n", outcome.reply);
                if outcome.contact_captured {
                    eprintln!("\x1B[2m(contact saved)\x1B[0m");
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                eprintln!("(Use Ctrl+D or /exit to quit)");
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("\x1B[31mreadline error: {e}\x1B[0m");
                break;
            }
        }
    }

    rl.save_history(&history_path).ok();
    if let Some(ref id) = repl.session_id {
        eprintln!("Session: {id}");
    }
    Ok(())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Slash commands
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug)]
struct ReplState {
    /// `None` until the first reply assigns one.
    session_id: Option<String>,
    language: Language,
}

#[derive(Debug, PartialEq, Eq)]
enum SlashOutcome {
    Continue,
    Exit,
}

fn handle_slash_command(
    input: &str,
    repl: &mut ReplState,
    languages: &LanguagePack,
    sessions: &SessionStore,
) -> SlashOutcome {
    let (cmd, arg) = match input.split_once(' ') {
        Some((cmd, rest)) => (cmd, Some(rest.trim()).filter(|s| !s.is_empty())),
        None => (input, None),
    };

    match cmd {
        "/exit" | "/quit" => return SlashOutcome::Exit,

        "/lang" => match arg.map(str::parse::<Language>) {
            Some(Ok(lang)) => {
                repl.language = lang;
                println!("{}\n", languages.get(lang).welcome);
            }
            Some(Err(e)) => eprintln!("{e}"),
            None => {
                eprintln!("Current language: {}", repl.language);
                for (code, row) in languages.iter() {
                    eprintln!("  {code}  {}", row.display_name);
                }
            }
        },

        "/session" => match arg {
            Some(id) => {
                repl.session_id = Some(id.to_string());
                match sessions.load(id) {
                    Some(stored) => {
                        repl.language = stored.profile.language;
                        eprintln!(
                            "Resumed session {id} ({} turns, {})",
                            stored.history.len(),
                            repl.language
                        );
                    }
                    None => eprintln!("Session switched to: {id}"),
                }
            }
            None => eprintln!(
                "Current session: {}",
                repl.session_id.as_deref().unwrap_or("(new)")
            ),
        },

        "/new" => {
            repl.session_id = None;
            eprintln!("Started a new session.");
        }

        "/profile" => {
            match current_profile(repl, sessions).map(|p| serde_json::to_string_pretty(&p)) {
                Some(Ok(json)) => println!("{json}"),
                Some(Err(e)) => eprintln!("profile: {e}"),
                None => eprintln!("No profile yet."),
            }
        }

        "/help" => {
            eprintln!("Commands:");
            eprintln!("  /lang [code]     Switch language (en, de, uk, ru, ro)");
            eprintln!("  /session [id]    Show or resume a session");
            eprintln!("  /new             Start a fresh session");
            eprintln!("  /profile         Show what is known about you");
            eprintln!("  /exit, /quit     Exit");
        }

        other => eprintln!("Unknown command: {other}  (type /help for a list)"),
    }

    SlashOutcome::Continue
}

/// Profile of the REPL's session, read from disk when it is not loaded yet.
fn current_profile(repl: &ReplState, sessions: &SessionStore) -> Option<Profile> {
    let id = repl.session_id.as_deref()?;
    sessions.load(id).map(|s| s.profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_domain::profile::ProfileUpdate;

    fn repl() -> ReplState {
        ReplState {
            session_id: Some("abc".into()),
            language: Language::En,
        }
    }

    #[test]
    fn lang_switches_only_on_supported_codes() {
        let pack = LanguagePack::builtin();
        let store = SessionStore::in_memory();
        let mut r = repl();

        handle_slash_command("/lang de", &mut r, &pack, &store);
        assert_eq!(r.language, Language::De);

        handle_slash_command("/lang xx", &mut r, &pack, &store);
        assert_eq!(r.language, Language::De);
    }

    #[test]
    fn new_and_session_manage_the_id() {
        let pack = LanguagePack::builtin();
        let store = SessionStore::in_memory();
        let mut r = repl();

        handle_slash_command("/new", &mut r, &pack, &store);
        assert!(r.session_id.is_none());

        handle_slash_command("/session trip-42", &mut r, &pack, &store);
        assert_eq!(r.session_id.as_deref(), Some("trip-42"));
    }

    #[test]
    fn exit_commands() {
        let pack = LanguagePack::builtin();
        let store = SessionStore::in_memory();
        assert_eq!(
            handle_slash_command("/quit", &mut repl(), &pack, &store),
            SlashOutcome::Exit
        );
        assert_eq!(
            handle_slash_command("/profile", &mut repl(), &pack, &store),
            SlashOutcome::Continue
        );
    }

    #[test]
    fn resumed_session_profile_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        {
            let earlier = SessionStore::open(dir.path()).unwrap();
            earlier.get_or_create("trip-7", Language::Ro);
            earlier.update_profile("trip-7", ProfileUpdate::Destination("Grecia".into()));
            earlier.persist("trip-7").unwrap();
        }

        let pack = LanguagePack::builtin();
        let store = SessionStore::open(dir.path()).unwrap();
        let mut r = repl();
        handle_slash_command("/session trip-7", &mut r, &pack, &store);

        assert_eq!(r.language, Language::Ro);
        let profile = current_profile(&r, &store).unwrap();
        assert_eq!(profile.destination.as_deref(), Some("Grecia"));
        // Looking does not register the session.
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_session_has_no_profile() {
        let store = SessionStore::in_memory();
        let r = ReplState {
            session_id: Some("nobody".into()),
            language: Language::En,
        };
        assert!(current_profile(&r, &store).is_none());
    }
}
