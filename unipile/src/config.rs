//! Unipile client configuration

use crate::error::UnipileError;
use reqwest::Url;

/// Environment variable holding the API host (`https://` is added to bare hosts)
pub const DSN_VAR: &str = "UNIPILE_DSN";

/// Legacy spelling of [`DSN_VAR`], read when the former is unset
pub const LEGACY_DSN_VAR: &str = "UNIPILE_DNS";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "UNIPILE_API_KEY";

/// Environment variable holding the default LinkedIn account id
pub const ACCOUNT_ID_VAR: &str = "UNIPILE_ACCOUNT_ID";

/// Credentials, host and default account for the Unipile API
#[derive(Clone, PartialEq, Eq)]
pub struct UnipileConfig {
    /// Base URL, always with a scheme
    pub base_url: String,
    /// API key, sent as the `X-API-KEY` header
    pub api_key: String,
    /// Account used when a call does not name one
    pub default_account_id: Option<String>,
}

impl UnipileConfig {
    /// Create a config; a bare host such as `api1.unipile.com:13111` gets `https://`
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: api_key.into(),
            default_account_id: None,
        }
    }

    /// Builder: Set the default account
    #[must_use]
    pub fn with_default_account(mut self, account_id: impl Into<String>) -> Self {
        self.default_account_id = Some(account_id.into());
        self
    }

    /// Load from `UNIPILE_DSN` (or `UNIPILE_DNS`), `UNIPILE_API_KEY` and `UNIPILE_ACCOUNT_ID`
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::Config` naming the first variable that is unset or empty
    pub fn from_env() -> Result<Self, UnipileError> {
        let dsn = env_var(DSN_VAR)
            .or_else(|| env_var(LEGACY_DSN_VAR))
            .ok_or_else(|| not_set(DSN_VAR))?;
        let api_key = env_var(API_KEY_VAR).ok_or_else(|| not_set(API_KEY_VAR))?;
        let account_id = env_var(ACCOUNT_ID_VAR).ok_or_else(|| not_set(ACCOUNT_ID_VAR))?;

        let config = Self::new(dsn, api_key).with_default_account(account_id);
        config.validate()?;
        Ok(config)
    }

    /// Check that the key is present and the base URL parses
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::Config` describing the first problem found
    pub fn validate(&self) -> Result<(), UnipileError> {
        if self.api_key.trim().is_empty() {
            return Err(UnipileError::Config(format!("{API_KEY_VAR} is empty")));
        }
        self.url().map(|_| ())
    }

    /// Parsed base URL
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::Config` if the base URL is not an http(s) URL
    pub fn url(&self) -> Result<Url, UnipileError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            UnipileError::Config(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(UnipileError::Config(format!(
                "base URL must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for UnipileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnipileConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("default_account_id", &self.default_account_id)
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn not_set(name: &str) -> UnipileError {
    UnipileError::Config(format!("{name} environment variable is not set"))
}

fn normalize_base_url(base_url: String) -> String {
    let trimmed = base_url.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https() {
        let config = UnipileConfig::new("api.unipile.com", "key");
        assert_eq!(config.base_url, "https://api.unipile.com");
    }

    #[test]
    fn test_http_prefix_is_kept() {
        let config = UnipileConfig::new("http://localhost:3000", "key");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = UnipileConfig::new("api.unipile.com", "").validate().unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_default_account() {
        let config = UnipileConfig::new("h", "k").with_default_account("acc-1");
        assert_eq!(config.default_account_id.as_deref(), Some("acc-1"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", UnipileConfig::new("h", "secret-key"));
        assert!(!rendered.contains("secret-key"));
    }
}
