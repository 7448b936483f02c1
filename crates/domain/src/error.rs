/// Shared error type used across all travel-assistant crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("provider {provider}: {message}")]
    Provider { provider: String, message: String },

    #[error("config: {0}")]
    Config(String),

    #[error("auth: {0}")]
    Auth(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// ── Conversation-boundary errors ───────────────────────────────────

/// A completion call failed: unreachable, rate-limited, timed out or the
/// response could not be parsed. The display string is the raw cause and
/// ends up inside the localized apology shown to the user.
#[derive(thiserror::Error, Debug)]
#[error("{cause}")]
pub struct UpstreamError {
    #[source]
    pub cause: Error,
}

impl From<Error> for UpstreamError {
    fn from(cause: Error) -> Self {
        Self { cause }
    }
}

/// A lead or session document could not be written.
#[derive(thiserror::Error, Debug)]
#[error("{sink}: {cause}")]
pub struct PersistenceError {
    pub sink: String,
    #[source]
    pub cause: Error,
}

impl PersistenceError {
    pub fn new(sink: impl Into<String>, cause: impl Into<Error>) -> Self {
        Self {
            sink: sink.into(),
            cause: cause.into(),
        }
    }
}

/// Caller-supplied input that is recovered from locally.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_displays_cause_verbatim() {
        let err = UpstreamError::from(Error::Timeout("completion exceeded 30000ms".into()));
        assert_eq!(err.to_string(), "timeout: completion exceeded 30000ms");
    }

    #[test]
    fn persistence_error_names_sink() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = PersistenceError::new("csv", io);
        assert_eq!(err.to_string(), "csv: IO: read-only");
    }
}
