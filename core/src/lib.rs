//! # Outreach Core
//!
//! Types shared by the API client crates and the tool layer.
//!
//! ## Modules
//!
//! - `agent`: The tool contract handed to a language model (`Tool`, `ToolError`,
//!   `ToolResult`, `ToolExecutorFn`)
//! - `payload`: `Payload<T>`, the raw-or-cleaned response returned by every request builder
//! - `json`: Lenient decoding of partially-unreliable API responses into typed records

pub mod agent;
pub mod json;
pub mod payload;

pub use agent::{Tool, ToolError, ToolExecutorFn, ToolFuture, ToolResult};
pub use payload::Payload;
