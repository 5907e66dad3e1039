//! Cleaned Apollo documents
//!
//! These shapes are the contract with the tool layer. Every optional field is
//! omitted from the serialized JSON when absent; it never appears as `null`.
//! Only the enrichment wrappers (`person`, `organization`) serialize an explicit
//! `null` when nothing was found.

use serde::{Deserialize, Serialize};

/// A cleaned contact record
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Person {
    /// Full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Profile headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// LinkedIn profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// `"{city}, {state}, {country}"`, only when all three are known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Current employer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_organization: Option<Organization>,
    /// Past and present jobs, in source order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_history: Option<Vec<EmploymentEntry>>,
}

/// One job in a person's employment history
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmploymentEntry {
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Employer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    /// Start date as reported by Apollo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date, `"Present"` for current jobs
    pub end_date: String,
}

/// A cleaned company record
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Organization {
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// LinkedIn company page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// Primary domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Year founded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i64>,
    /// Printed revenue (enrichment field preferred over search field)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    /// Estimated headcount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<u64>,
    /// Industry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Latest funding stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_funding: Option<String>,
    /// Printed total funding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_funding: Option<String>,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// At most the first ten keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// A cleaned job posting
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JobPosting {
    /// Role title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Posting URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Job location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Posting body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Date posted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
}

/// Cleaned people search
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeopleSearch {
    /// Matching people
    pub people: Vec<Person>,
}

/// Cleaned organization search
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationSearch {
    /// Matching organizations
    pub organizations: Vec<Organization>,
}

/// Cleaned job postings listing
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JobPostings {
    /// Open roles
    pub job_postings: Vec<JobPosting>,
}

/// Cleaned single-person enrichment
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersonEnrichment {
    /// The matched person, `null` when there was no match
    pub person: Option<Person>,
}

/// Cleaned bulk people enrichment
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BulkPeopleEnrichment {
    /// One entry per match, in request order
    pub matches: Vec<Person>,
}

/// Cleaned single-organization enrichment
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationEnrichment {
    /// The matched organization, `null` when there was no match
    pub organization: Option<Organization>,
}

/// Cleaned bulk organization enrichment
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BulkOrganizationEnrichment {
    /// Enriched organizations
    pub organizations: Vec<Organization>,
}
