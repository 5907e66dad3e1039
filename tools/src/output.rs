//! Input parsing and output rendering shared by every tool

use outreach_core::Payload;
use outreach_core::agent::{ToolError, ToolResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a tool renders its result
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON of the cleaned document
    #[default]
    Json,
    /// Markdown rendering of the cleaned document
    Markdown,
}

impl OutputFormat {
    /// Read the optional `format` field of a tool input
    ///
    /// # Errors
    ///
    /// Returns `ToolError` for a value other than `"json"` or `"markdown"`
    pub fn from_input(input: &Value) -> Result<Self, ToolError> {
        match input.get("format") {
            None | Some(Value::Null) => Ok(Self::Json),
            Some(format) => serde_json::from_value(format.clone()).map_err(|_| {
                ToolError::new(format!(
                    "Unsupported format: {format} (expected \"json\" or \"markdown\")"
                ))
            }),
        }
    }
}

/// Parse a tool's JSON input
///
/// # Errors
///
/// Returns `ToolError` if the input is not valid JSON
pub fn parse_input(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|e| ToolError::new(format!("Invalid input JSON: {e}")))
}

/// Decode a tool's parsed input into typed parameters
///
/// # Errors
///
/// Returns `ToolError` naming the field that does not fit
pub fn decode_params<P: DeserializeOwned>(input: Value) -> Result<P, ToolError> {
    serde_json::from_value(input).map_err(|e| ToolError::new(format!("Invalid parameters: {e}")))
}

/// Serialize a result as pretty JSON
///
/// # Errors
///
/// Returns `ToolError` if serialization fails
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> ToolResult {
    serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::new(format!("Failed to serialize result: {e}")))
}

/// Render a payload; raw payloads are always JSON since markdown needs the cleaned shape
///
/// # Errors
///
/// Returns `ToolError` if serialization fails
pub fn render<T: Serialize>(
    payload: &Payload<T>,
    format: OutputFormat,
    markdown: fn(&T) -> String,
) -> ToolResult {
    match (payload, format) {
        (Payload::Cleaned(document), OutputFormat::Markdown) => Ok(markdown(document)),
        _ => to_json(payload),
    }
}
