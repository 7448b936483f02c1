pub mod auth;
pub mod chat;
pub mod health;
pub mod language;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
///
/// `/health` is public; everything under `/api` sits behind the bearer
/// token middleware (a no-op when no token is configured).
pub fn router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health::health));

    let protected = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/language", post(language::change_language))
        .route("/api/languages", get(language::list_languages))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::require_api_token,
        ));

    public.merge(protected)
}
