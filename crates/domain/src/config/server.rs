use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Server
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "d_8000")]
    pub port: u16,
    #[serde(default = "d_host")]
    pub host: String,
    #[serde(default)]
    pub cors: CorsConfig,
    /// Environment variable holding the API bearer token for `/api/*`.
    /// If the env var is set and non-empty, requests must carry
    /// `Authorization: Bearer <token>`. If unset, the server logs a warning
    /// and allows unauthenticated access (the chat widget is public).
    #[serde(default = "d_api_token_env")]
    pub api_token_env: String,
    /// Per-IP token-bucket rate limiting. `None` disables it.
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
    /// Upper bound on in-flight requests across all sessions.
    #[serde(default = "d_max_concurrent")]
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".into(),
            cors: CorsConfig::default(),
            api_token_env: d_api_token_env(),
            rate_limit: None,
            max_concurrent_requests: d_max_concurrent(),
        }
    }
}

/// Per-IP token-bucket rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// One token is added every `1 / requests_per_second` seconds.
    pub requests_per_second: u64,
    /// Maximum tokens in the bucket.
    pub burst_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed for CORS. Use `["*"]` when the widget is embedded
    /// on arbitrary sites. Defaults to localhost-only.
    #[serde(default = "d_cors_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: d_cors_origins(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_8000() -> u16 {
    8000
}
fn d_host() -> String {
    "127.0.0.1".into()
}
fn d_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:*".into(),
        "http://127.0.0.1:*".into(),
    ]
}
fn d_api_token_env() -> String {
    "TA_API_TOKEN".into()
}
fn d_max_concurrent() -> usize {
    256
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_the_widget_locally() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8000);
        assert!(cfg.rate_limit.is_none());
        assert!(cfg
            .cors
            .allowed_origins
            .iter()
            .all(|o| o.ends_with(":*")));
        assert_eq!(cfg.api_token_env, "TA_API_TOKEN");
    }

    #[test]
    fn public_deployment_with_rate_limit() {
        let cfg: ServerConfig = toml::from_str(
            r#"
            host = "0.0.0.0"
            max_concurrent_requests = 64

            [cors]
            allowed_origins = ["https://travel.example.com"]

            [rate_limit]
            requests_per_second = 2
            burst_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.max_concurrent_requests, 64);
        assert_eq!(cfg.cors.allowed_origins, vec!["https://travel.example.com"]);
        let rl = cfg.rate_limit.unwrap();
        assert_eq!((rl.requests_per_second, rl.burst_size), (2, 10));
    }
}
