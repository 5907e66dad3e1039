//! Tools executed through the registry against mock APIs

#![allow(clippy::unwrap_used)] // Test code

use outreach_apollo::{ApolloClient, ApolloConfig};
use outreach_tools::{ToolRegistry, apollo_tools, unipile_tools};
use outreach_unipile::{UnipileClient, UnipileConfig};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_for(apollo: &MockServer, unipile: &MockServer) -> ToolRegistry {
    let registry = ToolRegistry::new();
    let apollo_config = ApolloConfig::new("apollo-key").with_endpoint(apollo.uri());
    registry.register_all(apollo_tools(&ApolloClient::new(apollo_config).unwrap()));

    let unipile_config =
        UnipileConfig::new(unipile.uri(), "unipile-key").with_default_account("acc");
    registry.register_all(unipile_tools(&UnipileClient::new(unipile_config).unwrap()));
    registry
}

#[tokio::test]
async fn test_all_tools_registered() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    let registry = registry_for(&apollo, &unipile);

    assert_eq!(registry.count(), 12);
    assert_eq!(
        registry.list_tools(),
        vec![
            "bulk_organization_enrichment",
            "bulk_people_enrichment",
            "get_linkedin_company",
            "get_linkedin_posts",
            "get_linkedin_profile",
            "organization_enrichment",
            "organization_job_postings",
            "organization_search",
            "people_enrichment",
            "people_search",
            "search_linkedin_companies",
            "search_linkedin_users",
        ]
    );
}

#[tokio::test]
async fn test_people_search_markdown() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/mixed_people/search"))
        .and(body_partial_json(json!({"person_titles": ["CTO"], "page": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [{
                "name": "Ada Lovelace",
                "title": "CTO",
                "linkedin_url": "https://linkedin.com/in/ada"
            }]
        })))
        .expect(1)
        .mount(&apollo)
        .await;

    let output = registry_for(&apollo, &unipile)
        .execute(
            "people_search",
            json!({"person_titles": ["CTO"], "format": "markdown"}).to_string(),
        )
        .await
        .unwrap();

    assert_eq!(
        output,
        "## People Search Results\n\n### Ada Lovelace\n\
         **Title:** CTO\n\
         **LinkedIn:** https://linkedin.com/in/ada\n"
    );
}

#[tokio::test]
async fn test_empty_enrichment_markdown_sentinel() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/organizations/enrich"))
        .and(query_param("domain", "nothing.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&apollo)
        .await;

    let output = registry_for(&apollo, &unipile)
        .execute(
            "organization_enrichment",
            json!({"domain": "nothing.test", "format": "markdown"}).to_string(),
        )
        .await
        .unwrap();

    assert_eq!(output, "No organization data found for enrichment.");
}

#[tokio::test]
async fn test_apollo_api_error_is_a_tool_error() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/mixed_companies/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&apollo)
        .await;

    let err = registry_for(&apollo, &unipile)
        .execute("organization_search", json!({"q_organization_name": "Acme"}).to_string())
        .await
        .unwrap_err();

    assert_eq!(
        err.message,
        "Apollo API error (status 429): Failed to fetch organization search results"
    );
}

#[tokio::test]
async fn test_linkedin_posts_resolves_provider_id() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/janedoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "provider_id": "ACoAAA",
            "first_name": "Jane",
            "last_name": "Doe"
        })))
        .expect(1)
        .mount(&unipile)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/ACoAAA/posts"))
        .and(query_param("account_id", "acc"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "p1", "text": "Hello", "comment_counter": 1}]
        })))
        .expect(1)
        .mount(&unipile)
        .await;

    let output = registry_for(&apollo, &unipile)
        .execute("get_linkedin_posts", json!({"identifier": "janedoe", "limit": 2}).to_string())
        .await
        .unwrap();

    let output: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        output,
        json!({"posts": [{
            "id": "p1",
            "text": "Hello",
            "stats": {"comments": 1},
            "author": null,
            "attachments": []
        }]})
    );
}

#[tokio::test]
async fn test_linkedin_user_search_defaults_to_five() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/linkedin/search"))
        .and(body_partial_json(json!({"category": "people", "keywords": "founder", "limit": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&unipile)
        .await;

    let output = registry_for(&apollo, &unipile)
        .execute("search_linkedin_users", json!({"keywords": "founder"}).to_string())
        .await
        .unwrap();

    assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), json!({"people": []}));
}

#[tokio::test]
async fn test_linkedin_failure_is_prefixed() {
    let apollo = MockServer::start().await;
    let unipile = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&unipile)
        .await;

    let err = registry_for(&apollo, &unipile)
        .execute("get_linkedin_profile", json!({"identifier": "ghost"}).to_string())
        .await
        .unwrap_err();

    assert_eq!(err.message, "Failed to get LinkedIn profile: Unipile API error: 404");
}
