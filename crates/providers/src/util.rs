//! Helpers shared by every outbound HTTP client (LLM providers and lead
//! sinks alike).

use ta_domain::config::{AuthConfig, AuthMode};
use ta_domain::error::{Error, Result};

/// Map a [`reqwest::Error`] onto the domain error: timeouts stay
/// distinguishable, everything else is [`Error::Http`].
pub fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

/// Resolve the secret described by an [`AuthConfig`], or `None` when the
/// endpoint is unauthenticated (`mode = "none"`).
pub fn resolve_auth(auth: &AuthConfig) -> Result<Option<String>> {
    if auth.mode == AuthMode::None {
        return Ok(None);
    }
    resolve_api_key(auth).map(Some)
}

/// Resolve the API key from an [`AuthConfig`].
///
/// Lookup order:
/// 1. inline `key` (logged as a warning)
/// 2. OS keychain entry `service`/`account`
/// 3. the env var named by `env`
/// 4. `{SERVICE}_{ACCOUNT}` env var, for hosts without a keychain daemon
pub fn resolve_api_key(auth: &AuthConfig) -> Result<String> {
    if let Some(ref key) = auth.key {
        tracing::warn!("secret read from inline config 'key'; use 'env' or the keychain instead");
        return Ok(key.clone());
    }

    let keychain = auth.service.as_deref().zip(auth.account.as_deref());

    if let Some((service, account)) = keychain {
        match resolve_from_keychain(service, account) {
            Ok(secret) => return Ok(secret),
            Err(e) => tracing::warn!(
                service = %service,
                account = %account,
                error = %e,
                "keychain unavailable, trying environment"
            ),
        }
    }

    if let Some(ref var) = auth.env {
        return std::env::var(var)
            .map_err(|_| Error::Auth(format!("environment variable '{var}' is not set")));
    }

    if let Some((service, account)) = keychain {
        let var = keychain_fallback_env_name(service, account);
        if let Ok(val) = std::env::var(&var) {
            tracing::info!(env_var = %var, "secret resolved from keychain fallback env var");
            return Ok(val);
        }
    }

    Err(Error::Auth(
        "no secret configured: set 'key', 'env', or 'service'+'account'".into(),
    ))
}

/// Read a secret from the platform credential store.
pub fn resolve_from_keychain(service: &str, account: &str) -> Result<String> {
    let entry = keyring::Entry::new(service, account)
        .map_err(|e| Error::Auth(format!("keyring entry: {e}")))?;
    entry
        .get_password()
        .map_err(|e| Error::Auth(format!("keyring lookup: {e}")))
}

/// `("travel-assistant", "openai-key")` → `TRAVEL_ASSISTANT_OPENAI_KEY`.
pub fn keychain_fallback_env_name(service: &str, account: &str) -> String {
    format!("{service}_{account}").to_uppercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_env_name_uppercases_and_replaces_hyphens() {
        assert_eq!(
            keychain_fallback_env_name("travel-assistant", "openai-key"),
            "TRAVEL_ASSISTANT_OPENAI_KEY"
        );
        assert_eq!(keychain_fallback_env_name("TA", "KEY"), "TA_KEY");
    }

    #[test]
    fn inline_key_wins() {
        let auth = AuthConfig {
            key: Some("sk-inline".into()),
            env: Some("TA_TEST_NEVER_READ".into()),
            service: Some("travel-assistant".into()),
            account: Some("never".into()),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&auth).unwrap(), "sk-inline");
    }

    #[test]
    fn env_var_is_read() {
        let var = "TA_TEST_UTIL_ENV_KEY_4411";
        std::env::set_var(var, "from-env");
        let auth = AuthConfig {
            env: Some(var.into()),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&auth).unwrap(), "from-env");
        std::env::remove_var(var);
    }

    #[test]
    fn missing_env_var_names_the_variable() {
        let auth = AuthConfig {
            env: Some("TA_TEST_UTIL_MISSING_9021".into()),
            ..Default::default()
        };
        let err = resolve_api_key(&auth).unwrap_err();
        assert!(err.to_string().contains("TA_TEST_UTIL_MISSING_9021"));
    }

    #[test]
    fn keychain_falls_back_to_derived_env_var() {
        let var = "TA_TEST_FALLBACK_PROVIDER";
        std::env::set_var(var, "fallback-secret");
        let auth = AuthConfig {
            service: Some("ta-test".into()),
            account: Some("fallback-provider".into()),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&auth).unwrap(), "fallback-secret");
        std::env::remove_var(var);
    }

    #[test]
    fn empty_auth_is_an_error() {
        let err = resolve_api_key(&AuthConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn mode_none_needs_no_secret() {
        let auth = AuthConfig {
            mode: AuthMode::None,
            ..Default::default()
        };
        assert_eq!(resolve_auth(&auth).unwrap(), None);
    }
}
