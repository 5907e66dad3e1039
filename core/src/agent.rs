//! Tool contract for language-model agents
//!
//! A tool is a `(Tool, ToolExecutorFn)` pair: the definition is sent to the model,
//! the executor runs when the model calls the tool. Executors take the model's
//! input as a JSON string and resolve to a string result, so they stay agnostic of
//! the model provider.
//!
//! ## Example
//!
//! ```
//! use outreach_core::agent::{Tool, ToolError, ToolExecutorFn, ToolFuture};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let tool = Tool {
//!     name: "echo".to_string(),
//!     description: "Echo the input back".to_string(),
//!     input_schema: json!({"type": "object"}),
//! };
//!
//! let executor: ToolExecutorFn = Arc::new(|input: String| {
//!     Box::pin(async move {
//!         if input.is_empty() {
//!             return Err(ToolError::new("empty input"));
//!         }
//!         Ok(input)
//!     }) as ToolFuture
//! });
//! # let _ = (tool, executor);
//! ```

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Tool definition following the JSON-schema tool format used by LLM APIs
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// Tool name (used to identify which tool to call)
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: serde_json::Value,
}

/// Result from tool execution
pub type ToolResult = Result<String, ToolError>;

/// Boxed future returned by a tool executor
pub type ToolFuture = Pin<Box<dyn Future<Output = ToolResult> + Send>>;

/// Tool executor: JSON input string in, string result out
pub type ToolExecutorFn = Arc<dyn Fn(String) -> ToolFuture + Send + Sync>;

/// Tool execution errors
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolError {
    /// Error message
    pub message: String,
}

impl ToolError {
    /// Create a tool error from any displayable message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::new("Missing 'query' field");
        assert_eq!(err.to_string(), "Missing 'query' field");
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_tool_serialization() {
        let tool = Tool {
            name: "people_search".to_string(),
            description: "Search for people".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        };

        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["name"], "people_search");
        assert_eq!(value["input_schema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_executor_roundtrip() {
        let executor: ToolExecutorFn = Arc::new(|input: String| {
            Box::pin(async move { Ok(format!("got {input}")) }) as ToolFuture
        });

        let result = executor("ping".to_string()).await;
        assert_eq!(result, Ok("got ping".to_string()));
    }
}
