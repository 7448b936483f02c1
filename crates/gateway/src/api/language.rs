use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use ta_domain::language::Language;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LanguageBody {
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageSwitch {
    pub success: bool,
    pub lang: Language,
    pub welcome_message: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: Language,
    pub name: String,
}

/// `POST /api/language`. Unsupported codes fall back to the default.
pub async fn change_language(
    State(state): State<AppState>,
    Json(body): Json<LanguageBody>,
) -> Json<LanguageSwitch> {
    let lang = Language::resolve(
        body.lang.as_deref(),
        state.config.conversation.default_language,
    );
    Json(LanguageSwitch {
        success: true,
        lang,
        welcome_message: state.languages.get(lang).welcome.clone(),
    })
}

/// `GET /api/languages`
pub async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageEntry>> {
    Json(
        state
            .languages
            .iter()
            .map(|(code, row)| LanguageEntry {
                code,
                name: row.display_name.clone(),
            })
            .collect(),
    )
}
