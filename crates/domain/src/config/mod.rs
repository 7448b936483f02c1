mod conversation;
mod leads;
mod llm;
mod observability;
mod server;
mod sessions;

pub use conversation::*;
pub use leads::*;
pub use llm::*;
pub use observability::*;
pub use server::*;
pub use sessions::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub conversation: ConversationConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
    #[serde(default)]
    pub leads: LeadsConfig,
    #[serde(default)]
    pub languages: LanguagesConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ConfigSeverity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ConfigSeverity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push(ConfigError::error("server.port", "port must be greater than 0"));
        }
        if self.server.host.is_empty() {
            errors.push(ConfigError::error("server.host", "host must not be empty"));
        }
        if self.server.max_concurrent_requests == 0 {
            errors.push(ConfigError::error(
                "server.max_concurrent_requests",
                "must be greater than 0",
            ));
        }
        if let Some(rl) = &self.server.rate_limit {
            if rl.requests_per_second == 0 || rl.burst_size == 0 {
                errors.push(ConfigError::error(
                    "server.rate_limit",
                    "requests_per_second and burst_size must be greater than 0",
                ));
            }
        }

        // CORS: warn if wildcard is used.
        if self.server.cors.allowed_origins.iter().any(|o| o == "*") {
            errors.push(ConfigError::warning(
                "server.cors.allowed_origins",
                "wildcard \"*\" allows all origins",
            ));
        }

        self.validate_llm(&mut errors);
        self.validate_leads(&mut errors);

        if self.conversation.history_window_turns == 0 {
            errors.push(ConfigError::warning(
                "conversation.history_window_turns",
                "0 sends no history to the model; every turn starts fresh",
            ));
        }

        if !(0.0..=1.0).contains(&self.observability.sample_rate) {
            errors.push(ConfigError::error(
                "observability.sample_rate",
                "must be between 0.0 and 1.0",
            ));
        }

        if self.sessions.persist && self.sessions.state_path.as_os_str().is_empty() {
            errors.push(ConfigError::error(
                "sessions.state_path",
                "state_path must not be empty when persist = true",
            ));
        }

        errors
    }

    fn validate_llm(&self, errors: &mut Vec<ConfigError>) {
        let llm = &self.llm;

        if llm.providers.is_empty() {
            errors.push(ConfigError::warning("llm.providers", "no LLM providers configured"));
        }

        for (i, provider) in llm.providers.iter().enumerate() {
            if provider.id.is_empty() {
                errors.push(ConfigError::error(
                    format!("llm.providers[{i}].id"),
                    "provider id must not be empty",
                ));
            }
            if provider.base_url.is_empty() {
                errors.push(ConfigError::error(
                    format!("llm.providers[{i}].base_url"),
                    "provider base_url must not be empty",
                ));
            }
        }

        if let Some(id) = &llm.provider {
            if !llm.providers.iter().any(|p| &p.id == id) {
                errors.push(ConfigError::error(
                    "llm.provider",
                    format!("unknown provider id '{id}'"),
                ));
            }
        }

        if !(0.0..=2.0).contains(&llm.temperature) {
            errors.push(ConfigError::error("llm.temperature", "must be between 0.0 and 2.0"));
        }
        if llm.max_tokens == 0 {
            errors.push(ConfigError::error("llm.max_tokens", "must be greater than 0"));
        }
        if llm.timeout_ms == 0 {
            errors.push(ConfigError::error("llm.timeout_ms", "must be greater than 0"));
        }
        if llm.model.is_empty() {
            errors.push(ConfigError::error("llm.model", "model must not be empty"));
        }
    }

    fn validate_leads(&self, errors: &mut Vec<ConfigError>) {
        let primary = &self.leads.primary;
        match primary.kind {
            LeadSinkKind::None => {}
            LeadSinkKind::Sheets => {
                if primary.spreadsheet_id.as_deref().unwrap_or("").is_empty() {
                    errors.push(ConfigError::error(
                        "leads.primary.spreadsheet_id",
                        "required when kind = \"sheets\"",
                    ));
                }
                if primary.sheet_range.is_empty() {
                    errors.push(ConfigError::error(
                        "leads.primary.sheet_range",
                        "sheet_range must not be empty",
                    ));
                }
            }
            LeadSinkKind::Webhook => {
                if primary.url.as_deref().unwrap_or("").is_empty() {
                    errors.push(ConfigError::error(
                        "leads.primary.url",
                        "required when kind = \"webhook\"",
                    ));
                }
            }
        }

        if self.leads.fallback_path.as_os_str().is_empty() {
            errors.push(ConfigError::error(
                "leads.fallback_path",
                "fallback_path must not be empty",
            ));
        }
    }
}
