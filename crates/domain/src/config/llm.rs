use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LLM provider system
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider id used for completions. `None` selects the first
    /// provider that initialized.
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default = "d_model")]
    pub model: String,
    #[serde(default = "d_temperature")]
    pub temperature: f32,
    #[serde(default = "d_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on a single completion call. Expiry is reported to the
    /// user like any other upstream failure.
    #[serde(default = "d_timeout_ms")]
    pub timeout_ms: u64,
    /// Startup policy for LLM providers.
    ///
    /// - `allow_none` (default): the server boots even if no provider
    ///   initializes; every chat turn answers with the localized error.
    /// - `require_one`: abort startup if no provider initializes.
    #[serde(default)]
    pub startup_policy: LlmStartupPolicy,
    /// Registered LLM providers (data-driven: adding a provider = adding config).
    #[serde(default = "d_providers")]
    pub providers: Vec<ProviderConfig>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: None,
            model: d_model(),
            temperature: d_temperature(),
            max_tokens: d_max_tokens(),
            timeout_ms: d_timeout_ms(),
            startup_policy: LlmStartupPolicy::AllowNone,
            providers: d_providers(),
        }
    }
}

/// Controls how the server handles LLM provider initialization at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LlmStartupPolicy {
    #[default]
    AllowNone,
    RequireOne,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub id: String,
    pub kind: ProviderKind,
    pub base_url: String,
    #[serde(default)]
    pub auth: AuthConfig,
    /// Overrides `llm.model` for this provider (Azure deployments are
    /// addressed by deployment name rather than model).
    #[serde(default)]
    pub default_model: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    OpenaiCompat,
    AzureOpenai,
}

/// Where a secret comes from. Shared by LLM providers and lead sinks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,
    /// Header name (e.g. "Authorization", "api-key").
    #[serde(default)]
    pub header: Option<String>,
    /// Header value prefix (e.g. "Bearer ").
    #[serde(default)]
    pub prefix: Option<String>,
    /// Env var containing the key.
    #[serde(default)]
    pub env: Option<String>,
    /// Direct key (for config-only setups; prefer env or keychain).
    #[serde(default)]
    pub key: Option<String>,
    /// Keychain service name (e.g., "travel-assistant").
    #[serde(default)]
    pub service: Option<String>,
    /// Keychain account name (e.g., "openai-api-key").
    #[serde(default)]
    pub account: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    ApiKey,
    Keychain,
    None,
}

// ── serde default helpers ───────────────────────────────────────────

fn d_model() -> String {
    "gpt-3.5-turbo".into()
}
fn d_temperature() -> f32 {
    0.7
}
fn d_max_tokens() -> u32 {
    800
}
fn d_timeout_ms() -> u64 {
    30_000
}
fn d_providers() -> Vec<ProviderConfig> {
    vec![ProviderConfig {
        id: "openai".into(),
        kind: ProviderKind::OpenaiCompat,
        base_url: "https://api.openai.com/v1".into(),
        auth: AuthConfig {
            env: Some("OPENAI_API_KEY".into()),
            ..Default::default()
        },
        default_model: None,
    }]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
