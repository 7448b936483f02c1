//! `POST /api/chat`: one conversation turn.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use ta_domain::profile::ProfileHints;

use crate::runtime::InboundMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_info: Option<ProfileHints>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    pub contact_saved: bool,
    pub detected_info: DetectedInfo,
}

#[derive(Debug, Default, Serialize)]
pub struct DetectedInfo {
    /// `null` when this message named no destination.
    pub destination: Option<String>,
}

/// Always 200: completion and persistence failures are reported inside
/// `response` in the conversation's language.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatBody>) -> Json<ChatReply> {
    let outcome = state
        .engine
        .handle_message(InboundMessage {
            session_id: body.session_id,
            language_hint: body.lang,
            text: body.message,
            hints: body.user_info,
        })
        .await;

    Json(ChatReply {
        response: outcome.reply,
        session_id: outcome.session_id,
        contact_saved: outcome.contact_captured,
        detected_info: DetectedInfo {
            destination: outcome.detected_destination,
        },
    })
}
