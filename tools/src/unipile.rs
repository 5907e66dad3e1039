//! LinkedIn tools backed by the Unipile client
//!
//! Every tool also accepts an optional `account_id` (overriding the client's
//! default account) and `raw` flag. Failures come back prefixed with what the tool
//! was doing, e.g. `Failed to get LinkedIn profile: ...`.

use crate::output::{decode_params, parse_input, to_json};
use outreach_core::agent::{Tool, ToolError, ToolExecutorFn, ToolFuture};
use outreach_unipile::{CallOptions, Page, Payload, SearchParams, UnipileClient, UnipileError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::future::Future;
use std::sync::Arc;

/// Results returned by `search_linkedin_users` when the model sets no limit
pub const DEFAULT_USER_SEARCH_LIMIT: u32 = 5;

#[derive(Deserialize)]
struct IdentifierInput {
    identifier: String,
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Deserialize)]
struct KeywordsInput {
    keywords: String,
    #[serde(default)]
    limit: Option<u32>,
}

/// All five LinkedIn tools sharing `client`
#[must_use]
pub fn unipile_tools(client: &UnipileClient) -> Vec<(Tool, ToolExecutorFn)> {
    vec![
        get_linkedin_profile_tool(client),
        search_linkedin_users_tool(client),
        get_linkedin_posts_tool(client),
        get_linkedin_company_tool(client),
        search_linkedin_companies_tool(client),
    ]
}

/// Create the `get_linkedin_profile` tool
#[must_use]
pub fn get_linkedin_profile_tool(client: &UnipileClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_linkedin_profile".to_string(),
        description: "Get a LinkedIn user profile by their public identifier".to_string(),
        input_schema: schema(
            json!({
                "identifier": {
                    "type": "string",
                    "description": "The LinkedIn user's public identifier (e.g., \"johndoe\")"
                }
            }),
            &["identifier"],
        ),
    };

    let executor = executor(
        client,
        "Failed to get LinkedIn profile",
        |client, input: IdentifierInput, options| async move {
            client.get_user_profile(&input.identifier, &options).await
        },
    );
    (tool, executor)
}

/// Create the `search_linkedin_users` tool
#[must_use]
pub fn search_linkedin_users_tool(client: &UnipileClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "search_linkedin_users".to_string(),
        description: "Search for LinkedIn users by keywords".to_string(),
        input_schema: schema(
            json!({
                "keywords": {"type": "string", "description": "The search keywords"},
                "limit": limit_property(DEFAULT_USER_SEARCH_LIMIT)
            }),
            &["keywords"],
        ),
    };

    let executor = executor(
        client,
        "Failed to search LinkedIn users",
        |client, input: KeywordsInput, options| async move {
            let params = SearchParams::people(input.keywords)
                .with_limit(input.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_USER_SEARCH_LIMIT));
            client.search_linkedin(&params, &options).await
        },
    );
    (tool, executor)
}

/// Create the `get_linkedin_posts` tool
///
/// Posts are listed by provider id, so the profile is looked up first.
#[must_use]
pub fn get_linkedin_posts_tool(client: &UnipileClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_linkedin_posts".to_string(),
        description: "Get LinkedIn posts from a specific user".to_string(),
        input_schema: schema(
            json!({
                "identifier": {
                    "type": "string",
                    "description": "The LinkedIn user's public identifier (e.g., \"johndoe\")"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of posts to return"
                }
            }),
            &["identifier"],
        ),
    };

    let executor = executor(
        client,
        "Failed to get LinkedIn posts",
        |client, input: IdentifierInput, options| async move {
            let profile_options = CallOptions {
                raw: false,
                ..options.clone()
            };
            let provider_id = client
                .get_user_profile(&input.identifier, &profile_options)
                .await?
                .into_cleaned()
                .flatten()
                .and_then(|profile| profile.provider_id)
                .ok_or_else(|| {
                    UnipileError::ResponseParseFailed(format!(
                        "profile {} has no provider_id",
                        input.identifier
                    ))
                })?;

            let page = Page {
                cursor: None,
                limit: input.limit,
            };
            client.get_user_posts(&provider_id, &page, &options).await
        },
    );
    (tool, executor)
}

/// Create the `get_linkedin_company` tool
#[must_use]
pub fn get_linkedin_company_tool(client: &UnipileClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_linkedin_company".to_string(),
        description: "Get details about a LinkedIn company".to_string(),
        input_schema: schema(
            json!({
                "identifier": {
                    "type": "string",
                    "description": "The LinkedIn company identifier (e.g., \"linkedin\")"
                }
            }),
            &["identifier"],
        ),
    };

    let executor = executor(
        client,
        "Failed to get LinkedIn company",
        |client, input: IdentifierInput, options| async move {
            client.get_company_profile(&input.identifier, &options).await
        },
    );
    (tool, executor)
}

/// Create the `search_linkedin_companies` tool
#[must_use]
pub fn search_linkedin_companies_tool(client: &UnipileClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "search_linkedin_companies".to_string(),
        description: "Search for LinkedIn companies by keywords".to_string(),
        input_schema: schema(
            json!({
                "keywords": {"type": "string", "description": "The search keywords"},
                "limit": limit_property(outreach_unipile::DEFAULT_SEARCH_LIMIT)
            }),
            &["keywords"],
        ),
    };

    let executor = executor(
        client,
        "Failed to search LinkedIn companies",
        |client, input: KeywordsInput, options| async move {
            client.search_companies(&input.keywords, input.limit, &options).await
        },
    );
    (tool, executor)
}

/// Build an executor: parse input and call options, run `call`, render JSON
fn executor<P, T, F, Fut>(client: &UnipileClient, failure: &'static str, call: F) -> ToolExecutorFn
where
    P: DeserializeOwned + Send + 'static,
    T: Serialize + Send + 'static,
    F: Fn(UnipileClient, P, CallOptions) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Payload<T>, UnipileError>> + Send + 'static,
{
    let client = client.clone();
    let call = Arc::new(call);

    Arc::new(move |input: String| {
        let client = client.clone();
        let call = Arc::clone(&call);
        Box::pin(async move {
            let input = parse_input(&input)?;
            let options: CallOptions = decode_params(input.clone())?;
            let params: P = decode_params(input)?;

            let payload = call(client, params, options)
                .await
                .map_err(|e| ToolError::new(format!("{failure}: {e}")))?;
            to_json(&payload)
        }) as ToolFuture
    })
}

fn schema(properties: Value, required: &[&str]) -> Value {
    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "required": required
    });
    if let Some(properties) = schema["properties"].as_object_mut() {
        properties.insert(
            "account_id".to_string(),
            json!({
                "type": "string",
                "description": "LinkedIn account to act as. Defaults to the configured account."
            }),
        );
        properties.insert(
            "raw".to_string(),
            json!({
                "type": "boolean",
                "description": "Return the untouched API response. Defaults to false."
            }),
        );
    }
    schema
}

fn limit_property(default: u32) -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "description": format!("Maximum number of results to return. Defaults to {default}.")
    })
}
