//! LLM-facing tools over the outreach API clients
//!
//! Each tool is a `(Tool, ToolExecutorFn)` pair: a JSON-schema definition for the
//! model and an executor taking the model's JSON input and returning a string.
//!
//! ## Modules
//!
//! - `apollo`: Contact/company database tools (search, job postings, enrichment),
//!   rendered as JSON or markdown
//! - `unipile`: LinkedIn tools (profiles, people search, posts, companies)
//! - `registry`: Tool registry for dynamic tool management
//! - `output`: Input parsing and output rendering shared by the tools
//!
//! Tools never panic on model input: malformed JSON, wrong parameter types and
//! API failures all come back as a `ToolError`.

pub mod apollo;
pub mod output;
pub mod registry;
pub mod unipile;

pub use outreach_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};

// Re-export commonly used types
pub use apollo::apollo_tools;
pub use output::OutputFormat;
pub use registry::ToolRegistry;
pub use unipile::unipile_tools;
