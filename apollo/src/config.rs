//! Apollo client configuration

use crate::error::ApolloError;
use reqwest::Url;

/// Default Apollo API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.apollo.io";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "APOLLO_API_KEY";

/// Environment variable overriding the endpoint
pub const ENDPOINT_VAR: &str = "APOLLO_ENDPOINT";

/// Credentials and endpoint for the Apollo API
#[derive(Clone, PartialEq, Eq)]
pub struct ApolloConfig {
    /// API key, sent as the `api_key` request parameter
    pub api_key: String,
    /// Base endpoint, e.g. `https://api.apollo.io`
    pub endpoint: String,
}

impl ApolloConfig {
    /// Create a config for the default endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Builder: Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Load from `APOLLO_API_KEY` and the optional `APOLLO_ENDPOINT`
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Config` if the key is unset or the config is invalid
    pub fn from_env() -> Result<Self, ApolloError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ApolloError::Config(format!("{API_KEY_VAR} environment variable is not set"))
        })?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            config = config.with_endpoint(endpoint);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the key is present and the endpoint is an absolute http(s) URL
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Config` describing the first problem found
    pub fn validate(&self) -> Result<(), ApolloError> {
        if self.api_key.trim().is_empty() {
            return Err(ApolloError::Config(format!("{API_KEY_VAR} is empty")));
        }
        self.base_url().map(|_| ())
    }

    /// Parsed endpoint URL
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Config` if the endpoint is not an http(s) URL
    pub fn base_url(&self) -> Result<Url, ApolloError> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            ApolloError::Config(format!("invalid endpoint {:?}: {e}", self.endpoint))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ApolloError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for ApolloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApolloConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
