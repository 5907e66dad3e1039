//! Apollo API client implementation

use crate::{config::ApolloConfig, error::ApolloError};
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde_json::Value;

/// Apollo API client
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApolloClient {
    client: Client,
    config: ApolloConfig,
    base_url: Url,
}

impl ApolloClient {
    /// Create a client from an explicit config
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Config` if the config does not validate
    pub fn new(config: ApolloConfig) -> Result<Self, ApolloError> {
        config.validate()?;
        let base_url = config.base_url()?;

        Ok(Self {
            client: Client::new(),
            config,
            base_url,
        })
    }

    /// Create a client from `APOLLO_API_KEY` / `APOLLO_ENDPOINT`
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Config` if the key is unset or the endpoint is invalid
    pub fn from_env() -> Result<Self, ApolloError> {
        Self::new(ApolloConfig::from_env()?)
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &ApolloConfig {
        &self.config
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Endpoint URL with `segments` appended as individually encoded path segments
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ApolloError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApolloError::Config(format!(
                    "endpoint {:?} cannot be a base URL",
                    self.config.endpoint
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// POST a JSON body and decode the JSON response
    pub(crate) async fn post_json<B>(
        &self,
        url: Url,
        body: &B,
        context: &str,
    ) -> Result<Value, ApolloError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(
            target: "outreach::apollo",
            method = "POST",
            path = url.path(),
            "sending request"
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Cache-Control", "no-cache")
            .json(body)
            .send()
            .await
            .map_err(|e| ApolloError::RequestFailed(e.to_string()))?;

        Self::read(response, context).await
    }

    /// GET `url` (query already attached) and decode the JSON response
    pub(crate) async fn get_json(&self, url: Url, context: &str) -> Result<Value, ApolloError> {
        tracing::debug!(
            target: "outreach::apollo",
            method = "GET",
            path = url.path(),
            "sending request"
        );

        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| ApolloError::RequestFailed(e.to_string()))?;

        Self::read(response, context).await
    }

    async fn read(response: Response, context: &str) -> Result<Value, ApolloError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: "outreach::apollo",
                status = status.as_u16(),
                context,
                "request rejected"
            );
            return Err(ApolloError::Api {
                status: status.as_u16(),
                body,
                message: Some(context.to_string()),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApolloError::ResponseParseFailed(e.to_string()))
    }
}
