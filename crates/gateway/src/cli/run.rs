//! `travel-assistant run`: one message, one reply.

use std::sync::Arc;

use ta_domain::config::Config;

use crate::bootstrap;
use crate::runtime::InboundMessage;

pub async fn run(
    config: Arc<Config>,
    message: String,
    session: Option<String>,
    lang: Option<String>,
    json_output: bool,
) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config)?;

    let outcome = state
        .engine
        .handle_message(InboundMessage {
            session_id: session,
            language_hint: lang,
            text: message,
            hints: None,
        })
        .await;

    if json_output {
        let json = serde_json::to_string_pretty(&outcome)
            .map_err(|e| anyhow::anyhow!("serializing outcome: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", outcome.reply);
        eprintln!("\x1b[2msession: {}\x1b[0m", outcome.session_id);
    }

    Ok(())
}
