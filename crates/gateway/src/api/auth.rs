//! Bearer-token middleware for `/api/*`.
//!
//! The token is read from `server.api_token_env` once at startup and only
//! its SHA-256 digest is kept. Without a token every request passes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::state::AppState;

pub async fn require_api_token(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.api_token_hash.as_deref() else {
        return next.run(req).await;
    };

    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !token_matches(expected, provided) {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({ "error": "invalid or missing API token" })),
        )
            .into_response();
    }

    next.run(req).await
}

/// Compare digests in constant time so neither content nor length leaks.
fn token_matches(expected_hash: &[u8], authorization: Option<&str>) -> bool {
    let token = authorization
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or("");
    let provided_hash = Sha256::digest(token.as_bytes());
    bool::from(provided_hash.as_slice().ct_eq(expected_hash))
}
