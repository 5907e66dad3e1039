//! Raw Apollo response records
//!
//! Only the fields the cleaners read are modeled. Everything is optional: Apollo
//! omits or nulls fields freely. Every field goes through [`lenient`] or
//! [`lenient_vec`], so a mistyped value drops only that field and one malformed
//! record does not discard a whole page.

#![allow(missing_docs)] // Field names mirror the Apollo API

use outreach_core::json::{lenient, lenient_vec};
use serde::Deserialize;

/// A person record from search or enrichment
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawPerson {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub linkedin_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub organization: Option<RawOrganization>,
    #[serde(deserialize_with = "lenient_vec")]
    pub employment_history: Option<Vec<RawEmployment>>,
}

/// One entry of a person's employment history
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawEmployment {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub organization_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<String>,
}

/// An organization record from search or enrichment
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawOrganization {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub linkedin_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub primary_domain: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub founded_year: Option<i64>,
    /// Present on enrichment responses
    #[serde(deserialize_with = "lenient")]
    pub annual_revenue_printed: Option<String>,
    /// Present on search responses
    #[serde(deserialize_with = "lenient")]
    pub organization_revenue_printed: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_num_employees: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub keywords: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub short_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub total_funding_printed: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub latest_funding_stage: Option<String>,
}

/// A job posting record
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawJobPosting {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub posted_date: Option<String>,
}

/// `POST /v1/mixed_people/search`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPeopleSearch {
    #[serde(deserialize_with = "lenient_vec")]
    pub people: Option<Vec<RawPerson>>,
}

/// `POST /v1/mixed_companies/search`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawOrganizationSearch {
    #[serde(deserialize_with = "lenient_vec")]
    pub organizations: Option<Vec<RawOrganization>>,
}

/// `GET /v1/organizations/{id}/job_postings`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawJobPostings {
    #[serde(deserialize_with = "lenient_vec")]
    pub organization_job_postings: Option<Vec<RawJobPosting>>,
}

/// `POST /v1/people/match`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPersonEnrichment {
    #[serde(deserialize_with = "lenient")]
    pub person: Option<RawPerson>,
}

/// `POST /v1/people/bulk_match`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawBulkPeopleEnrichment {
    #[serde(deserialize_with = "lenient_vec")]
    pub matches: Option<Vec<RawPerson>>,
}

/// `GET /v1/organizations/enrich`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawOrganizationEnrichment {
    #[serde(deserialize_with = "lenient")]
    pub organization: Option<RawOrganization>,
}

/// `POST /v1/organizations/bulk_enrich`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawBulkOrganizationEnrichment {
    #[serde(deserialize_with = "lenient_vec")]
    pub organizations: Option<Vec<RawOrganization>>,
}
