//! Tool registry for dynamic tool management
//!
//! The registry provides:
//! - Registration by tool name (re-registering replaces)
//! - Execution by name
//! - Listing and lookup of tool definitions for the model

use outreach_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe tool registry
///
/// Cloning is cheap; clones share the same tools.
///
/// ## Example
///
/// ```no_run
/// use outreach_apollo::ApolloClient;
/// use outreach_tools::{ToolRegistry, apollo::apollo_tools};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = ToolRegistry::new();
/// registry.register_all(apollo_tools(&ApolloClient::from_env()?));
///
/// let result = registry
///     .execute("people_search", r#"{"person_titles": ["CTO"], "format": "markdown"}"#.to_string())
///     .await?;
/// println!("{result}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, (Tool, ToolExecutorFn)>>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a tool with its executor
    ///
    /// Returns `true` if a tool with the same name was replaced.
    pub fn register(&self, tool: Tool, executor: ToolExecutorFn) -> bool {
        tracing::debug!(target: "outreach::tools", tool = %tool.name, "registering tool");
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        tools.insert(tool.name.clone(), (tool, executor)).is_some()
    }

    /// Register every pair, e.g. the output of [`crate::apollo::apollo_tools`]
    pub fn register_all(&self, tools: impl IntoIterator<Item = (Tool, ToolExecutorFn)>) {
        for (tool, executor) in tools {
            self.register(tool, executor);
        }
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is not found or execution fails
    pub async fn execute(&self, name: &str, input: String) -> ToolResult {
        // Release the lock before awaiting
        let executor = {
            let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
            tools.get(name).map(|(_, executor)| Arc::clone(executor))
        };

        match executor {
            Some(executor) => {
                tracing::debug!(target: "outreach::tools", tool = name, "executing tool");
                let result = executor(input).await;
                if let Err(err) = &result {
                    tracing::warn!(
                        target: "outreach::tools",
                        tool = name,
                        error = %err,
                        "tool failed"
                    );
                }
                result
            }
            None => Err(ToolError::new(format!("Tool not found: {name}"))),
        }
    }

    /// Registered tool names, sorted alphabetically
    #[must_use]
    pub fn list_tools(&self) -> Vec<String> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// All tool definitions sorted by name, ready to hand to the model
    #[must_use]
    pub fn get_tools(&self) -> Vec<Tool> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        let mut tool_list: Vec<Tool> = tools.values().map(|(tool, _)| tool.clone()).collect();
        tool_list.sort_by(|a, b| a.name.cmp(&b.name));
        tool_list
    }

    /// A tool definition by name
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<Tool> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.get(name).map(|(tool, _)| tool.clone())
    }

    /// Remove a tool; `false` if it was not registered
    pub fn unregister(&self, name: &str) -> bool {
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        tools.remove(name).is_some()
    }

    /// Number of registered tools
    #[must_use]
    pub fn count(&self) -> usize {
        self.tools.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use outreach_core::agent::ToolFuture;
    use serde_json::json;

    fn echo_tool(name: &str) -> (Tool, ToolExecutorFn) {
        let tool = Tool {
            name: name.to_string(),
            description: "Echo the input".to_string(),
            input_schema: json!({"type": "object"}),
        };
        let executor: ToolExecutorFn =
            Arc::new(|input: String| Box::pin(async move { Ok(input) }) as ToolFuture);
        (tool, executor)
    }

    fn failing_tool() -> (Tool, ToolExecutorFn) {
        let (mut tool, _) = echo_tool("fail");
        tool.description = "Always fails".to_string();
        let executor: ToolExecutorFn =
            Arc::new(|_input: String| {
                Box::pin(async move { Err(ToolError::new("boom")) }) as ToolFuture
            });
        (tool, executor)
    }

    #[test]
    fn test_registry_new() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_registry_register_replace() {
        let registry = ToolRegistry::new();
        let (tool1, executor1) = echo_tool("echo");
        let (tool2, executor2) = echo_tool("echo");

        assert!(!registry.register(tool1, executor1));
        assert!(registry.register(tool2, executor2));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_registry_list_sorted() {
        let registry = ToolRegistry::new();
        registry.register_all([echo_tool("web_search"), echo_tool("memory_search")]);

        assert_eq!(registry.list_tools(), vec!["memory_search", "web_search"]);
        let tools = registry.get_tools();
        assert_eq!(tools[0].name, "memory_search");
        assert_eq!(tools[1].name, "web_search");
    }

    #[test]
    fn test_registry_get_tool() {
        let registry = ToolRegistry::new();
        registry.register_all([echo_tool("echo")]);

        assert_eq!(registry.get_tool("echo").unwrap().description, "Echo the input");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[tokio::test]
    async fn test_registry_execute() {
        let registry = ToolRegistry::new();
        registry.register_all([echo_tool("echo"), failing_tool()]);

        let input = json!({"query": "weather"}).to_string();
        let result = registry.execute("echo", input).await.unwrap();
        let output: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(output["query"], "weather");

        let err = registry.execute("fail", "{}".to_string()).await.unwrap_err();
        assert_eq!(err.message, "boom");
    }

    #[tokio::test]
    async fn test_registry_execute_not_found() {
        let registry = ToolRegistry::new();
        let err = registry.execute("nonexistent", "{}".to_string()).await.unwrap_err();
        assert_eq!(err.message, "Tool not found: nonexistent");
    }

    #[test]
    fn test_registry_unregister() {
        let registry = ToolRegistry::new();
        registry.register_all([echo_tool("echo")]);

        assert!(registry.unregister("echo"));
        assert_eq!(registry.count(), 0);
        assert!(!registry.unregister("echo"));
    }
}
