//! Error types for the Apollo API client

use thiserror::Error;

/// Errors that can occur when interacting with the Apollo API
#[derive(Debug, Error)]
pub enum ApolloError {
    /// Configuration is missing or invalid
    #[error("Apollo configuration error: {0}")]
    Config(String),

    /// A required argument was missing or invalid (raised before any request)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not valid JSON
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// API returned a non-success status
    #[error(
        "Apollo API error (status {status}): {}",
        message.as_deref().unwrap_or("request failed")
    )]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
        /// What the failed call was trying to do
        message: Option<String>,
    },
}

impl ApolloError {
    /// HTTP status code, if this error came from an API response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
