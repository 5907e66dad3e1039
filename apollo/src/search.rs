//! Search operations: people, organizations and job postings

use crate::{
    cleaners::{clean_job_postings, clean_organization_search, clean_people_search},
    client::ApolloClient,
    error::ApolloError,
    model::{JobPostings, OrganizationSearch, PeopleSearch},
};
use outreach_core::Payload;
use serde::{Deserialize, Serialize};

/// Page requested when none is given
pub const DEFAULT_PAGE: u32 = 1;

/// Results per page when none is given
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Filters for `POST /v1/mixed_people/search`
///
/// Filter fields serialize into the request body as-is; empty lists and unset
/// values are left out. Paging and `include_similar_titles` are resolved to
/// their defaults when the request is built.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeopleSearchParams {
    /// Person name, full or partial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_person_name: Option<String>,
    /// Job titles; a person matches if they hold any of them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub person_titles: Vec<String>,
    /// Also match titles similar to `person_titles` (default `true`)
    #[serde(skip_serializing)]
    pub include_similar_titles: Option<bool>,
    /// Where people live: cities, US states or countries
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub person_locations: Vec<String>,
    /// Seniority at the current employer
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub person_seniorities: Vec<String>,
    /// Headquarters location of the current employer
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_locations: Vec<String>,
    /// Employer domains, current or past (no `www.`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub q_organization_domains_list: Vec<String>,
    /// Email statuses, e.g. `"verified"`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_email_status: Vec<String>,
    /// Apollo organization ids of employers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_ids: Vec<String>,
    /// Employee count ranges such as `"1,10"`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_num_employees_ranges: Vec<String>,
    /// Free-text keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_keywords: Option<String>,
    /// Page number (default 1)
    #[serde(skip_serializing)]
    pub page: Option<u32>,
    /// Results per page (default 10)
    #[serde(skip_serializing)]
    pub per_page: Option<u32>,
    /// Return the untouched API response
    #[serde(skip_serializing)]
    pub raw: bool,
}

/// Filters for `POST /v1/mixed_companies/search`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationSearchParams {
    /// Organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_organization_name: Option<String>,
    /// Headquarters locations
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_locations: Vec<String>,
    /// Organization domains
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub q_organization_domains: Vec<String>,
    /// Employee count ranges such as `"250,500"`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_num_employees_ranges: Vec<String>,
    /// Industries
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_industries: Vec<String>,
    /// Page number (default 1)
    #[serde(skip_serializing)]
    pub page: Option<u32>,
    /// Results per page (default 10)
    #[serde(skip_serializing)]
    pub per_page: Option<u32>,
    /// Return the untouched API response
    #[serde(skip_serializing)]
    pub raw: bool,
}

/// Parameters for `GET /v1/organizations/{id}/job_postings`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationJobPostingsParams {
    /// Apollo organization id (required)
    pub organization_id: String,
    /// Page number (default 1)
    pub page: Option<u32>,
    /// Results per page (default 10)
    pub per_page: Option<u32>,
    /// Return the untouched API response
    pub raw: bool,
}

impl OrganizationJobPostingsParams {
    /// Parameters for the first page of an organization's postings
    #[must_use]
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct PeopleSearchBody<'a> {
    api_key: &'a str,
    #[serde(flatten)]
    filters: &'a PeopleSearchParams,
    include_similar_titles: bool,
    page: u32,
    per_page: u32,
}

#[derive(Serialize)]
struct OrganizationSearchBody<'a> {
    api_key: &'a str,
    #[serde(flatten)]
    filters: &'a OrganizationSearchParams,
    page: u32,
    per_page: u32,
}

impl ApolloClient {
    /// Search for people
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Api` for non-success responses, and
    /// `RequestFailed`/`ResponseParseFailed` for transport or decoding failures
    pub async fn people_search(
        &self,
        params: &PeopleSearchParams,
    ) -> Result<Payload<PeopleSearch>, ApolloError> {
        let body = PeopleSearchBody {
            api_key: self.api_key(),
            filters: params,
            include_similar_titles: params.include_similar_titles.unwrap_or(true),
            page: params.page.unwrap_or(DEFAULT_PAGE),
            per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        };

        let url = self.url(&["v1", "mixed_people", "search"])?;
        let response = self
            .post_json(url, &body, "Failed to fetch people search results")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_people_search))
    }

    /// Search for organizations
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::Api` for non-success responses, and
    /// `RequestFailed`/`ResponseParseFailed` for transport or decoding failures
    pub async fn organization_search(
        &self,
        params: &OrganizationSearchParams,
    ) -> Result<Payload<OrganizationSearch>, ApolloError> {
        let body = OrganizationSearchBody {
            api_key: self.api_key(),
            filters: params,
            page: params.page.unwrap_or(DEFAULT_PAGE),
            per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        };

        let url = self.url(&["v1", "mixed_companies", "search"])?;
        let response = self
            .post_json(url, &body, "Failed to fetch organization search results")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_organization_search))
    }

    /// List an organization's current job postings
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::InvalidArgument` if `organization_id` is blank (no
    /// request is sent), otherwise the same errors as the other operations
    pub async fn organization_job_postings(
        &self,
        params: &OrganizationJobPostingsParams,
    ) -> Result<Payload<JobPostings>, ApolloError> {
        let organization_id = params.organization_id.trim();
        if organization_id.is_empty() {
            return Err(ApolloError::InvalidArgument("organization_id is required".to_string()));
        }

        let mut url = self.url(&["v1", "organizations", organization_id, "job_postings"])?;
        url.query_pairs_mut()
            .append_pair("api_key", self.api_key())
            .append_pair("page", &params.page.unwrap_or(DEFAULT_PAGE).to_string())
            .append_pair("per_page", &params.per_page.unwrap_or(DEFAULT_PER_PAGE).to_string());

        let response = self
            .get_json(url, "Failed to fetch organization job postings")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_job_postings))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_people_body_resolves_defaults() {
        let params = PeopleSearchParams {
            person_titles: vec!["CTO".to_string()],
            raw: true,
            ..PeopleSearchParams::default()
        };
        let body = PeopleSearchBody {
            api_key: "k",
            filters: &params,
            include_similar_titles: params.include_similar_titles.unwrap_or(true),
            page: params.page.unwrap_or(DEFAULT_PAGE),
            per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "api_key": "k",
                "person_titles": ["CTO"],
                "include_similar_titles": true,
                "page": 1,
                "per_page": 10
            })
        );
    }

    #[test]
    fn test_organization_body_keeps_explicit_paging() {
        let params = OrganizationSearchParams {
            q_organization_name: Some("Acme".to_string()),
            page: Some(3),
            per_page: Some(25),
            ..OrganizationSearchParams::default()
        };
        let body = OrganizationSearchBody {
            api_key: "k",
            filters: &params,
            page: params.page.unwrap_or(DEFAULT_PAGE),
            per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"api_key": "k", "q_organization_name": "Acme", "page": 3, "per_page": 25})
        );
    }

    #[test]
    fn test_params_deserialize_from_tool_input() {
        let params: PeopleSearchParams = serde_json::from_value(json!({
            "person_titles": ["VP Sales"],
            "include_similar_titles": false,
            "per_page": 5
        }))
        .unwrap();

        assert_eq!(params.person_titles, vec!["VP Sales"]);
        assert_eq!(params.include_similar_titles, Some(false));
        assert_eq!(params.per_page, Some(5));
        assert_eq!(params.page, None);
        assert!(!params.raw);
    }
}
