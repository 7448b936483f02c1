//! Session identifiers.
//!
//! Ids arrive from callers and double as file names, so only
//! `[A-Za-z0-9_-]{1,128}` is accepted. Anything else is replaced by a
//! fresh v4 UUID.

const MAX_LEN: usize = 128;

pub fn is_valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Use the caller's id when it is acceptable, otherwise mint a new one.
/// Returns `(id, minted)`.
pub fn resolve_session_id(requested: Option<&str>) -> (String, bool) {
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) if is_valid_session_id(id) => (id.to_owned(), false),
        Some(id) => {
            tracing::warn!(requested = %id, "rejecting malformed session id");
            (new_session_id(), true)
        }
        None => (new_session_id(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uuid_and_slugs() {
        assert!(is_valid_session_id("0f8fad5b-d9cb-469f-a165-70867728950e"));
        assert!(is_valid_session_id("web_widget-42"));
    }

    #[test]
    fn rejects_path_like_ids() {
        assert!(!is_valid_session_id("../etc/passwd"));
        assert!(!is_valid_session_id("a/b"));
        assert!(!is_valid_session_id("with space"));
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id(&"x".repeat(129)));
    }

    #[test]
    fn resolve_keeps_valid_and_replaces_invalid() {
        assert_eq!(resolve_session_id(Some("abc")), ("abc".into(), false));

        let (id, minted) = resolve_session_id(Some("../../x"));
        assert!(minted);
        assert!(is_valid_session_id(&id));

        let (a, _) = resolve_session_id(None);
        let (b, _) = resolve_session_id(Some("  "));
        assert_ne!(a, b);
    }
}
