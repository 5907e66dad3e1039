//! Apollo contact/company database tools
//!
//! Seven tools, one per client operation. Each accepts the operation's parameters
//! plus an optional `format` of `"json"` (default) or `"markdown"`, and an optional
//! `raw` flag returning the untouched API response as JSON.

use crate::output::{OutputFormat, decode_params, parse_input, render};
use outreach_apollo::markdown::{
    bulk_organization_enrichment_to_markdown, bulk_people_enrichment_to_markdown,
    job_postings_to_markdown, organization_enrichment_to_markdown,
    organization_search_to_markdown, people_enrichment_to_markdown, people_search_to_markdown,
};
use outreach_apollo::{
    ApolloClient, ApolloError, BulkOrganizationEnrichmentParams, BulkPeopleEnrichmentParams,
    OrganizationEnrichmentParams, OrganizationJobPostingsParams, OrganizationSearchParams,
    PeopleEnrichmentParams, PeopleSearchParams, Payload,
};
use outreach_core::agent::{Tool, ToolError, ToolExecutorFn, ToolFuture};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::future::Future;
use std::sync::Arc;

/// All seven Apollo tools sharing `client`
#[must_use]
pub fn apollo_tools(client: &ApolloClient) -> Vec<(Tool, ToolExecutorFn)> {
    vec![
        people_search_tool(client),
        organization_search_tool(client),
        organization_job_postings_tool(client),
        people_enrichment_tool(client),
        bulk_people_enrichment_tool(client),
        organization_enrichment_tool(client),
        bulk_organization_enrichment_tool(client),
    ]
}

/// Create the `people_search` tool
#[must_use]
pub fn people_search_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "people_search".to_string(),
        description: "Search for people in the Apollo database.".to_string(),
        input_schema: schema(
            json!({
                "q_person_name": {"type": "string", "description": "The person's name."},
                "person_titles": string_list("Job titles. Only one needs to match."),
                "include_similar_titles": {
                    "type": "boolean",
                    "description":
                        "Whether to include people with similar job titles. Defaults to true."
                },
                "person_locations": string_list(
                    "Cities, US states, and countries where people live."
                ),
                "person_seniorities": string_list(
                    "Job seniority, e.g., 'senior', 'manager', 'executive'."
                ),
                "organization_locations": string_list(
                    "Headquarters location of the person's employer."
                ),
                "q_organization_domains_list": string_list(
                    "Employer's domain name (current or previous)."
                ),
                "contact_email_status": string_list(
                    "Email statuses: \"verified\", \"unverified\", \"likely to engage\", \"unavailable\"."
                ),
                "organization_ids": string_list("Apollo IDs for employers."),
                "organization_num_employees_ranges": string_list(
                    "Number of employees, e.g., [\"1,10\", \"10000,20000\"]."
                ),
                "q_keywords": {"type": "string", "description": "Keywords to filter results."},
                "page": page_property(),
                "per_page": per_page_property()
            }),
            &[],
        ),
    };

    let executor = executor(
        client,
        |client, params: PeopleSearchParams| async move { client.people_search(&params).await },
        people_search_to_markdown,
    );
    (tool, executor)
}

/// Create the `organization_search` tool
#[must_use]
pub fn organization_search_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "organization_search".to_string(),
        description: "Search for organizations in the Apollo database.".to_string(),
        input_schema: schema(
            json!({
                "q_organization_name": {
                    "type": "string",
                    "description": "The name of the organization."
                },
                "organization_locations": string_list("Headquarters location."),
                "q_organization_domains": string_list("Domain names of the organization."),
                "organization_num_employees_ranges": string_list(
                    "Number of employees, e.g., [\"1,10\", \"10000,20000\"]."
                ),
                "organization_industries": string_list("Industries of the organization."),
                "page": page_property(),
                "per_page": per_page_property()
            }),
            &[],
        ),
    };

    let executor = executor(
        client,
        |client, params: OrganizationSearchParams| async move {
            client.organization_search(&params).await
        },
        organization_search_to_markdown,
    );
    (tool, executor)
}

/// Create the `organization_job_postings` tool
#[must_use]
pub fn organization_job_postings_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "organization_job_postings".to_string(),
        description: "Get an organization's job postings from the Apollo database.".to_string(),
        input_schema: schema(
            json!({
                "organization_id": {
                    "type": "string",
                    "description": "The Apollo ID for the company."
                },
                "page": page_property(),
                "per_page": per_page_property()
            }),
            &["organization_id"],
        ),
    };

    let executor = executor(
        client,
        |client, params: OrganizationJobPostingsParams| async move {
            client.organization_job_postings(&params).await
        },
        job_postings_to_markdown,
    );
    (tool, executor)
}

/// Create the `people_enrichment` tool
#[must_use]
pub fn people_enrichment_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "people_enrichment".to_string(),
        description: "Enrich data for a single person from Apollo.".to_string(),
        input_schema: schema(person_properties(), &[]),
    };

    let executor = executor(
        client,
        |client, params: PeopleEnrichmentParams| async move {
            client.people_enrichment(&params).await
        },
        people_enrichment_to_markdown,
    );
    (tool, executor)
}

/// Create the `bulk_people_enrichment` tool
#[must_use]
pub fn bulk_people_enrichment_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "bulk_people_enrichment".to_string(),
        description: "Enrich data for up to 10 people in a single API call from Apollo."
            .to_string(),
        input_schema: schema(
            json!({
                "details": {
                    "type": "array",
                    "description": "An array of person details to enrich.",
                    "items": {"type": "object", "properties": person_identity_properties()},
                    "minItems": 1,
                    "maxItems": 10
                },
                "reveal_personal_emails": reveal_property("personal emails"),
                "reveal_phone_number": reveal_property("phone numbers")
            }),
            &["details"],
        ),
    };

    let executor = executor(
        client,
        |client, params: BulkPeopleEnrichmentParams| async move {
            client.bulk_people_enrichment(&params).await
        },
        bulk_people_enrichment_to_markdown,
    );
    (tool, executor)
}

/// Create the `organization_enrichment` tool
#[must_use]
pub fn organization_enrichment_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "organization_enrichment".to_string(),
        description: "Enrich data for a single organization from Apollo.".to_string(),
        input_schema: schema(
            json!({
                "domain": {
                    "type": "string",
                    "description": "The domain name of the organization to enrich."
                }
            }),
            &["domain"],
        ),
    };

    let executor = executor(
        client,
        |client, params: OrganizationEnrichmentParams| async move {
            client.organization_enrichment(&params).await
        },
        organization_enrichment_to_markdown,
    );
    (tool, executor)
}

/// Create the `bulk_organization_enrichment` tool
#[must_use]
pub fn bulk_organization_enrichment_tool(client: &ApolloClient) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "bulk_organization_enrichment".to_string(),
        description: "Enrich data for up to 10 organizations in a single API call from Apollo."
            .to_string(),
        input_schema: schema(
            json!({
                "domains": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Domain names of the organizations to enrich.",
                    "minItems": 1,
                    "maxItems": 10
                }
            }),
            &["domains"],
        ),
    };

    let executor = executor(
        client,
        |client, params: BulkOrganizationEnrichmentParams| async move {
            client.bulk_organization_enrichment(&params).await
        },
        bulk_organization_enrichment_to_markdown,
    );
    (tool, executor)
}

/// Build an executor: parse input, run `call` on a clone of `client`, render the payload
fn executor<P, T, F, Fut>(
    client: &ApolloClient,
    call: F,
    markdown: fn(&T) -> String,
) -> ToolExecutorFn
where
    P: DeserializeOwned + Send + 'static,
    T: Serialize + Send + 'static,
    F: Fn(ApolloClient, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Payload<T>, ApolloError>> + Send + 'static,
{
    let client = client.clone();
    let call = Arc::new(call);

    Arc::new(move |input: String| {
        let client = client.clone();
        let call = Arc::clone(&call);
        Box::pin(async move {
            let input = parse_input(&input)?;
            let format = OutputFormat::from_input(&input)?;
            let params: P = decode_params(input)?;

            let payload = call(client, params)
                .await
                .map_err(|e| ToolError::new(e.to_string()))?;
            render(&payload, format, markdown)
        }) as ToolFuture
    })
}

/// Object schema with the shared `format` and `raw` properties added
fn schema(properties: Value, required: &[&str]) -> Value {
    let mut properties = match properties {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    properties.insert(
        "format".to_string(),
        json!({
            "type": "string",
            "enum": ["json", "markdown"],
            "description": "Output format. Defaults to json."
        }),
    );
    properties.insert(
        "raw".to_string(),
        json!({
            "type": "boolean",
            "description":
                "Return the untouched API response instead of the cleaned one. Defaults to false."
        }),
    );

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn string_list(description: &str) -> Value {
    json!({"type": "array", "items": {"type": "string"}, "description": description})
}

fn page_property() -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "description": "Page number of results. Defaults to 1."
    })
}

fn per_page_property() -> Value {
    json!({"type": "integer", "minimum": 1, "description": "Results per page. Defaults to 10."})
}

fn reveal_property(what: &str) -> Value {
    json!({
        "type": "boolean",
        "description": format!("Whether to reveal {what}. Defaults to false.")
    })
}

fn person_identity_properties() -> Value {
    json!({
        "first_name": {"type": "string", "description": "The person's first name."},
        "last_name": {"type": "string", "description": "The person's last name."},
        "name": {"type": "string", "description": "The person's full name."},
        "domain": {
            "type": "string",
            "description": "The domain name of the person's current employer."
        },
        "email": {"type": "string", "description": "The person's email address."},
        "linkedin_url": {"type": "string", "description": "The person's LinkedIn URL."}
    })
}

fn person_properties() -> Value {
    let mut properties = person_identity_properties();
    if let Value::Object(map) = &mut properties {
        map.insert("reveal_personal_emails".to_string(), reveal_property("personal emails"));
        map.insert("reveal_phone_number".to_string(), reveal_property("phone numbers"));
    }
    properties
}
