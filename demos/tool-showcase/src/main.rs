//! Tool Showcase
//!
//! Registers the Apollo and LinkedIn tools whose credentials are present in the
//! environment, then either lists them or runs one.
//!
//! ```text
//! tool-showcase                                   # list tools and their schemas
//! tool-showcase people_search '{"person_titles": ["CTO"], "format": "markdown"}'
//! tool-showcase get_linkedin_profile '{"identifier": "johndoe"}'
//! ```
//!
//! Set `RUST_LOG=outreach=debug` to see requests and tool calls.

use anyhow::{Context, bail};
use outreach_apollo::ApolloClient;
use outreach_tools::{ToolRegistry, apollo_tools, unipile_tools};
use outreach_unipile::UnipileClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = ToolRegistry::new();

    match ApolloClient::from_env() {
        Ok(client) => registry.register_all(apollo_tools(&client)),
        Err(err) => tracing::warn!(error = %err, "skipping Apollo tools"),
    }
    match UnipileClient::from_env() {
        Ok(client) => registry.register_all(unipile_tools(&client)),
        Err(err) => tracing::warn!(error = %err, "skipping LinkedIn tools"),
    }

    if registry.count() == 0 {
        bail!(
            "no tools available: set APOLLO_API_KEY and/or \
             UNIPILE_DSN, UNIPILE_API_KEY, UNIPILE_ACCOUNT_ID"
        );
    }

    let mut args = std::env::args().skip(1);
    let Some(name) = args.next() else {
        println!("=== {} tools ===\n", registry.count());
        for tool in registry.get_tools() {
            println!("{}: {}", tool.name, tool.description);
            println!("{}\n", serde_json::to_string_pretty(&tool.input_schema)?);
        }
        return Ok(());
    };
    let input = args.next().unwrap_or_else(|| "{}".to_string());

    if registry.get_tool(&name).is_none() {
        bail!("unknown tool {name:?}; available: {}", registry.list_tools().join(", "));
    }

    let output = registry
        .execute(&name, input)
        .await
        .with_context(|| format!("{name} failed"))?;
    println!("{output}");
    Ok(())
}
