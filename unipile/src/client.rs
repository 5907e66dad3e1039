//! Unipile API client implementation

use crate::{config::UnipileConfig, error::UnipileError};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-call options shared by every operation
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CallOptions {
    /// Account to act as; falls back to the client's default account
    pub account_id: Option<String>,
    /// Return the untouched API response
    pub raw: bool,
}

impl CallOptions {
    /// Options acting as `account_id`
    #[must_use]
    pub fn account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            raw: false,
        }
    }

    /// Builder: Request the untouched API response
    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.raw = true;
        self
    }
}

/// Cursor pagination for list endpoints
///
/// Each parameter is appended to the query only when set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Cursor returned by the previous page
    pub cursor: Option<String>,
    /// Maximum number of items
    pub limit: Option<u32>,
}

impl Page {
    /// First page with at most `limit` items
    #[must_use]
    pub const fn limit(limit: u32) -> Self {
        Self {
            cursor: None,
            limit: Some(limit),
        }
    }
}

/// Unipile API client
#[derive(Clone, Debug)]
pub struct UnipileClient {
    client: Client,
    config: UnipileConfig,
    base_url: Url,
}

impl UnipileClient {
    /// Create a client from an explicit config
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::Config` if the config does not validate
    pub fn new(config: UnipileConfig) -> Result<Self, UnipileError> {
        config.validate()?;
        let base_url = config.url()?;

        Ok(Self {
            client: Client::new(),
            config,
            base_url,
        })
    }

    /// Create a client from the `UNIPILE_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::Config` naming the first missing variable
    pub fn from_env() -> Result<Self, UnipileError> {
        Self::new(UnipileConfig::from_env()?)
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &UnipileConfig {
        &self.config
    }

    /// Resolve the account to act as: explicit id first, then the configured default
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::MissingAccountId` if neither is set
    pub fn account_id<'a>(&'a self, options: &'a CallOptions) -> Result<&'a str, UnipileError> {
        options
            .account_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.config.default_account_id.as_deref().filter(|id| !id.is_empty()))
            .ok_or(UnipileError::MissingAccountId)
    }

    /// `{base}/api/v1/{segments...}` with each segment percent-encoded
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, UnipileError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UnipileError::Config(format!(
                    "base URL {:?} cannot be a base",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }

    /// Same as [`Self::url`] with `account_id` and the optional page appended to the query
    pub(crate) fn scoped_url(
        &self,
        segments: &[&str],
        account_id: &str,
        page: Option<&Page>,
    ) -> Result<Url, UnipileError> {
        let mut url = self.url(segments)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("account_id", account_id);
            if let Some(page) = page {
                if let Some(cursor) = page.cursor.as_deref().filter(|c| !c.is_empty()) {
                    query.append_pair("cursor", cursor);
                }
                if let Some(limit) = page.limit.filter(|l| *l > 0) {
                    query.append_pair("limit", &limit.to_string());
                }
            }
        }
        Ok(url)
    }

    pub(crate) async fn get_json(&self, url: Url) -> Result<Value, UnipileError> {
        tracing::debug!(
            target: "outreach::unipile",
            method = "GET",
            path = url.path(),
            "sending request"
        );
        self.send(self.client.get(url)).await
    }

    pub(crate) async fn post_json<B>(&self, url: Url, body: &B) -> Result<Value, UnipileError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(
            target: "outreach::unipile",
            method = "POST",
            path = url.path(),
            "sending request"
        );
        self.send(self.client.post(url).json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, UnipileError> {
        let response = request
            .header("X-API-KEY", &self.config.api_key)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| UnipileError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: "outreach::unipile",
                status = status.as_u16(),
                "request rejected"
            );
            return Err(UnipileError::Api {
                status: status.as_u16(),
                body,
                message: None,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| UnipileError::ResponseParseFailed(e.to_string()))?;
        tracing::debug!(target: "outreach::unipile", status = status.as_u16(), "response received");
        Ok(body)
    }
}

/// Fail with `InvalidArgument` when a required string is blank
pub(crate) fn require<'a>(value: &'a str, what: &str) -> Result<&'a str, UnipileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(UnipileError::InvalidArgument(format!("{what} is required")))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    fn client() -> UnipileClient {
        let config =
            UnipileConfig::new("api.unipile.com:13111", "key").with_default_account("acc-env");
        UnipileClient::new(config).unwrap()
    }

    #[test]
    fn test_explicit_account_wins() {
        let client = client();
        let options = CallOptions::account("acc-call");
        assert_eq!(client.account_id(&options).unwrap(), "acc-call");
        assert_eq!(client.account_id(&CallOptions::default()).unwrap(), "acc-env");
    }

    #[test]
    fn test_missing_account() {
        let client = UnipileClient::new(UnipileConfig::new("h.example.com", "key")).unwrap();
        assert!(matches!(
            client.account_id(&CallOptions::default()),
            Err(UnipileError::MissingAccountId)
        ));
    }

    #[test]
    fn test_scoped_url_appends_only_set_paging() {
        let client = client();
        let url = client.scoped_url(&["users", "relations"], "acc", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.unipile.com:13111/api/v1/users/relations?account_id=acc"
        );

        let page = Page {
            cursor: Some("abc".to_string()),
            limit: Some(20),
        };
        let url = client.scoped_url(&["chats"], "acc", Some(&page)).unwrap();
        assert_eq!(url.query(), Some("account_id=acc&cursor=abc&limit=20"));

        let url = client.scoped_url(&["chats"], "acc", Some(&Page::limit(0))).unwrap();
        assert_eq!(url.query(), Some("account_id=acc"));
    }

    #[test]
    fn test_identifiers_are_encoded() {
        let url = client().url(&["users", "jane doe/x"]).unwrap();
        assert_eq!(url.path(), "/api/v1/users/jane%20doe%2Fx");
    }

    #[test]
    fn test_require() {
        assert_eq!(require(" id ", "Chat ID").unwrap(), "id");
        assert_eq!(
            require("  ", "Chat ID").unwrap_err().to_string(),
            "Invalid argument: Chat ID is required"
        );
    }
}
