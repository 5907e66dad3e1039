//! Error types for the Unipile API client

use thiserror::Error;

/// Errors that can occur when interacting with the Unipile API
#[derive(Debug, Error)]
pub enum UnipileError {
    /// Configuration is missing or invalid
    #[error("Unipile configuration error: {0}")]
    Config(String),

    /// No per-call account id was given and the client has no default
    #[error("Account ID is required but not provided")]
    MissingAccountId,

    /// A required argument was missing or empty (raised before any request)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not valid JSON
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// API returned a non-success status
    #[error("{}", api_message(*status, message.as_deref()))]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
        /// Optional description replacing the default message
        message: Option<String>,
    },
}

fn api_message(status: u16, message: Option<&str>) -> String {
    message.map_or_else(|| format!("Unipile API error: {status}"), str::to_string)
}

impl UnipileError {
    /// HTTP status code, if this error came from an API response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, if this error came from an API response
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}
