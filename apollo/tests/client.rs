//! Request/response tests against a mock Apollo server

#![allow(clippy::unwrap_used)] // Test code

use outreach_apollo::{
    ApolloClient, ApolloConfig, ApolloError, BulkOrganizationEnrichmentParams,
    BulkPeopleEnrichmentParams, OrganizationEnrichmentParams, OrganizationJobPostingsParams,
    OrganizationSearchParams, PeopleEnrichmentParams, PeopleSearchParams, Payload, PersonIdentity,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApolloClient {
    ApolloClient::new(ApolloConfig::new("test-key").with_endpoint(server.uri())).unwrap()
}

#[tokio::test]
async fn test_people_search_sends_defaults_and_cleans() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/mixed_people/search"))
        .and(header("Content-Type", "application/json"))
        .and(header("Cache-Control", "no-cache"))
        .and(body_json(json!({
            "api_key": "test-key",
            "person_titles": ["CEO"],
            "include_similar_titles": true,
            "page": 1,
            "per_page": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [{
                "id": "p1",
                "name": "Tim Zheng",
                "title": "CEO",
                "city": "San Francisco",
                "state": "California",
                "country": "United States",
                "email_status": "verified"
            }],
            "pagination": {"page": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = PeopleSearchParams {
        person_titles: vec!["CEO".to_string()],
        ..PeopleSearchParams::default()
    };
    let payload = client_for(&server).people_search(&params).await.unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"people": [{
            "name": "Tim Zheng",
            "title": "CEO",
            "location": "San Francisco, California, United States"
        }]})
    );
}

#[tokio::test]
async fn test_raw_mode_returns_body_untouched() {
    let server = MockServer::start().await;
    let body = json!({"organizations": [{"name": "Acme", "id": "o1", "raw_field": [1, 2]}]});
    Mock::given(method("POST"))
        .and(path("/v1/mixed_companies/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let params = OrganizationSearchParams {
        q_organization_name: Some("Acme".to_string()),
        raw: true,
        ..OrganizationSearchParams::default()
    };
    let payload = client_for(&server).organization_search(&params).await.unwrap();

    assert_eq!(payload, Payload::Raw(body));
}

#[tokio::test]
async fn test_api_error_carries_status_body_and_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/mixed_people/search"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid filters"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .people_search(&PeopleSearchParams::default())
        .await
        .unwrap_err();

    match err {
        ApolloError::Api { status, body, message } => {
            assert_eq!(status, 422);
            assert_eq!(body, "invalid filters");
            assert_eq!(message.as_deref(), Some("Failed to fetch people search results"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_is_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/organizations/enrich"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .organization_enrichment(&OrganizationEnrichmentParams::new("acme.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApolloError::ResponseParseFailed(_)));
}

#[tokio::test]
async fn test_job_postings_uses_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/organizations/org-42/job_postings"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organization_job_postings": [{
                "id": "j1",
                "title": "Rust Engineer",
                "url": "https://jobs.example.com/1",
                "city": "Remote"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = OrganizationJobPostingsParams {
        page: Some(2),
        ..OrganizationJobPostingsParams::new("org-42")
    };
    let payload = client_for(&server).organization_job_postings(&params).await.unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"job_postings": [{"title": "Rust Engineer", "url": "https://jobs.example.com/1"}]})
    );
}

#[tokio::test]
async fn test_job_postings_error_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/organizations/missing/job_postings"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .organization_job_postings(&OrganizationJobPostingsParams::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "Apollo API error (status 404): Failed to fetch organization job postings"
    );
}

#[tokio::test]
async fn test_people_enrichment_not_found_is_null_person() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/people/match"))
        .and(body_json(json!({
            "api_key": "test-key",
            "email": "nobody@example.com",
            "reveal_personal_emails": false,
            "reveal_phone_number": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"person": null})))
        .expect(1)
        .mount(&server)
        .await;

    let params = PeopleEnrichmentParams {
        identity: PersonIdentity {
            email: Some("nobody@example.com".to_string()),
            ..PersonIdentity::default()
        },
        ..PeopleEnrichmentParams::default()
    };
    let payload = client_for(&server).people_enrichment(&params).await.unwrap();

    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"person": null}));
}

#[tokio::test]
async fn test_invalid_arguments_send_no_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client
        .people_enrichment(&PeopleEnrichmentParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApolloError::InvalidArgument(_)));

    let err = client
        .organization_enrichment(&OrganizationEnrichmentParams::new(" "))
        .await
        .unwrap_err();
    assert!(matches!(err, ApolloError::InvalidArgument(_)));

    let err = client
        .organization_job_postings(&OrganizationJobPostingsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApolloError::InvalidArgument(_)));

    let too_many = BulkOrganizationEnrichmentParams {
        domains: (0..11).map(|i| format!("d{i}.com")).collect(),
        raw: false,
    };
    let err = client.bulk_organization_enrichment(&too_many).await.unwrap_err();
    assert!(matches!(err, ApolloError::InvalidArgument(_)));

    let err = client
        .bulk_people_enrichment(&BulkPeopleEnrichmentParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApolloError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_bulk_people_enrichment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/people/bulk_match"))
        .and(body_json(json!({
            "api_key": "test-key",
            "details": [{"email": "a@x.com"}, {"name": "B"}],
            "reveal_personal_emails": false,
            "reveal_phone_number": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [{"name": "A"}, {"name": "B", "title": "CFO"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = BulkPeopleEnrichmentParams {
        details: vec![
            PersonIdentity {
                email: Some("a@x.com".to_string()),
                ..PersonIdentity::default()
            },
            PersonIdentity {
                name: Some("B".to_string()),
                ..PersonIdentity::default()
            },
        ],
        ..BulkPeopleEnrichmentParams::default()
    };
    let payload = client_for(&server).bulk_people_enrichment(&params).await.unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"matches": [{"name": "A"}, {"name": "B", "title": "CFO"}]})
    );
}

#[tokio::test]
async fn test_organization_enrichment_query_and_cleaning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/organizations/enrich"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("domain", "acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organization": {
                "name": "Acme",
                "primary_domain": "acme.com",
                "annual_revenue_printed": "5M",
                "organization_revenue_printed": "4M",
                "estimated_num_employees": 50
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .organization_enrichment(&OrganizationEnrichmentParams::new("acme.com"))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"organization": {
            "name": "Acme",
            "domain": "acme.com",
            "revenue": "5M",
            "employees": 50
        }})
    );
}

#[tokio::test]
async fn test_bulk_organization_enrichment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/organizations/bulk_enrich"))
        .and(body_json(json!({"api_key": "test-key", "domains": ["a.com", "b.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organizations": [{"name": "A"}, {"name": "B"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = BulkOrganizationEnrichmentParams {
        domains: vec!["a.com".to_string(), "b.com".to_string()],
        raw: false,
    };
    let payload = client_for(&server).bulk_organization_enrichment(&params).await.unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"organizations": [{"name": "A"}, {"name": "B"}]})
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_failure() {
    let config = ApolloConfig::new("k").with_endpoint("http://127.0.0.1:1");
    let client = ApolloClient::new(config).unwrap();
    let err = client
        .bulk_organization_enrichment(&BulkOrganizationEnrichmentParams {
            domains: vec!["a.com".to_string()],
            raw: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApolloError::RequestFailed(_)));
}
