//! Enrichment operations for people and organizations

use crate::{
    cleaners::{
        clean_bulk_organization_enrichment, clean_bulk_people_enrichment,
        clean_organization_enrichment, clean_people_enrichment,
    },
    client::ApolloClient,
    error::ApolloError,
    model::{
        BulkOrganizationEnrichment, BulkPeopleEnrichment, OrganizationEnrichment,
        PersonEnrichment,
    },
};
use outreach_core::Payload;
use serde::{Deserialize, Serialize};

/// Maximum number of records a bulk enrichment call accepts
pub const MAX_BULK: usize = 10;

/// Fields identifying one person to enrich
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersonIdentity {
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current employer's domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// LinkedIn profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl PersonIdentity {
    /// Whether no identifying field carries a non-blank value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.name,
            &self.domain,
            &self.email,
            &self.linkedin_url,
        ]
        .into_iter()
        .all(|field| field.as_deref().is_none_or(|s| s.trim().is_empty()))
    }
}

/// Parameters for `POST /v1/people/match`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeopleEnrichmentParams {
    /// Who to look up
    #[serde(flatten)]
    pub identity: PersonIdentity,
    /// Reveal personal emails (default `false`)
    pub reveal_personal_emails: bool,
    /// Reveal phone numbers (default `false`)
    pub reveal_phone_number: bool,
    /// Return the untouched API response
    #[serde(skip_serializing)]
    pub raw: bool,
}

/// Parameters for `POST /v1/people/bulk_match`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BulkPeopleEnrichmentParams {
    /// One to ten people to look up
    pub details: Vec<PersonIdentity>,
    /// Reveal personal emails for everyone (default `false`)
    pub reveal_personal_emails: bool,
    /// Reveal phone numbers for everyone (default `false`)
    pub reveal_phone_number: bool,
    /// Return the untouched API response
    #[serde(skip_serializing)]
    pub raw: bool,
}

/// Parameters for `GET /v1/organizations/enrich`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationEnrichmentParams {
    /// Company domain (required)
    pub domain: String,
    /// Return the untouched API response
    pub raw: bool,
}

impl OrganizationEnrichmentParams {
    /// Parameters for enriching `domain`
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            raw: false,
        }
    }
}

/// Parameters for `POST /v1/organizations/bulk_enrich`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BulkOrganizationEnrichmentParams {
    /// One to ten company domains
    pub domains: Vec<String>,
    /// Return the untouched API response
    #[serde(skip_serializing)]
    pub raw: bool,
}

#[derive(Serialize)]
struct KeyedBody<'a, T: Serialize> {
    api_key: &'a str,
    #[serde(flatten)]
    params: &'a T,
}

fn check_bulk_len(field: &str, len: usize) -> Result<(), ApolloError> {
    if (1..=MAX_BULK).contains(&len) {
        Ok(())
    } else {
        Err(ApolloError::InvalidArgument(format!(
            "{field} must contain between 1 and {MAX_BULK} entries, got {len}"
        )))
    }
}

impl ApolloClient {
    /// Enrich a single person
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::InvalidArgument` if no identifying field is set (no
    /// request is sent), `ApolloError::Api` for non-success responses, and
    /// `RequestFailed`/`ResponseParseFailed` for transport or decoding failures
    pub async fn people_enrichment(
        &self,
        params: &PeopleEnrichmentParams,
    ) -> Result<Payload<PersonEnrichment>, ApolloError> {
        if params.identity.is_empty() {
            return Err(ApolloError::InvalidArgument(
                "at least one of first_name, last_name, name, domain, email or linkedin_url is required"
                    .to_string(),
            ));
        }

        let url = self.url(&["v1", "people", "match"])?;
        let body = KeyedBody { api_key: self.api_key(), params };
        let response = self
            .post_json(url, &body, "Failed to fetch person enrichment data")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_people_enrichment))
    }

    /// Enrich up to ten people in one call
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::InvalidArgument` unless `details` holds 1 to 10
    /// entries, otherwise the same errors as [`Self::people_enrichment`]
    pub async fn bulk_people_enrichment(
        &self,
        params: &BulkPeopleEnrichmentParams,
    ) -> Result<Payload<BulkPeopleEnrichment>, ApolloError> {
        check_bulk_len("details", params.details.len())?;

        let url = self.url(&["v1", "people", "bulk_match"])?;
        let body = KeyedBody { api_key: self.api_key(), params };
        let response = self
            .post_json(url, &body, "Failed to fetch bulk person enrichment data")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_bulk_people_enrichment))
    }

    /// Enrich a single organization by domain
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::InvalidArgument` if `domain` is blank, otherwise the
    /// same errors as the other operations
    pub async fn organization_enrichment(
        &self,
        params: &OrganizationEnrichmentParams,
    ) -> Result<Payload<OrganizationEnrichment>, ApolloError> {
        let domain = params.domain.trim();
        if domain.is_empty() {
            return Err(ApolloError::InvalidArgument("domain is required".to_string()));
        }

        let mut url = self.url(&["v1", "organizations", "enrich"])?;
        url.query_pairs_mut()
            .append_pair("api_key", self.api_key())
            .append_pair("domain", domain);

        let response = self
            .get_json(url, "Failed to fetch organization enrichment data")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_organization_enrichment))
    }

    /// Enrich up to ten organizations in one call
    ///
    /// # Errors
    ///
    /// Returns `ApolloError::InvalidArgument` unless `domains` holds 1 to 10
    /// entries, otherwise the same errors as the other operations
    pub async fn bulk_organization_enrichment(
        &self,
        params: &BulkOrganizationEnrichmentParams,
    ) -> Result<Payload<BulkOrganizationEnrichment>, ApolloError> {
        check_bulk_len("domains", params.domains.len())?;

        let url = self.url(&["v1", "organizations", "bulk_enrich"])?;
        let body = KeyedBody { api_key: self.api_key(), params };
        let response = self
            .post_json(url, &body, "Failed to fetch bulk organization enrichment data")
            .await?;

        Ok(Payload::from_body(response, params.raw, clean_bulk_organization_enrichment))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_emptiness() {
        assert!(PersonIdentity::default().is_empty());

        let blank = PersonIdentity {
            email: Some("   ".to_string()),
            ..PersonIdentity::default()
        };
        assert!(blank.is_empty());

        let email = PersonIdentity {
            email: Some("ada@example.com".to_string()),
            ..PersonIdentity::default()
        };
        assert!(!email.is_empty());
    }

    #[test]
    fn test_people_enrichment_body() {
        let params = PeopleEnrichmentParams {
            identity: PersonIdentity {
                name: Some("Ada Lovelace".to_string()),
                domain: Some("example.com".to_string()),
                ..PersonIdentity::default()
            },
            raw: true,
            ..PeopleEnrichmentParams::default()
        };
        let body = KeyedBody { api_key: "k", params: &params };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "api_key": "k",
                "name": "Ada Lovelace",
                "domain": "example.com",
                "reveal_personal_emails": false,
                "reveal_phone_number": false
            })
        );
    }

    #[test]
    fn test_bulk_people_body() {
        let params: BulkPeopleEnrichmentParams = serde_json::from_value(json!({
            "details": [{"email": "a@x.com"}, {"linkedin_url": "https://linkedin.com/in/b"}],
            "reveal_phone_number": true
        }))
        .unwrap();
        let body = KeyedBody { api_key: "k", params: &params };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "api_key": "k",
                "details": [{"email": "a@x.com"}, {"linkedin_url": "https://linkedin.com/in/b"}],
                "reveal_personal_emails": false,
                "reveal_phone_number": true
            })
        );
    }

    #[test]
    fn test_bulk_bounds() {
        assert!(check_bulk_len("domains", 1).is_ok());
        assert!(check_bulk_len("domains", MAX_BULK).is_ok());

        let err = check_bulk_len("domains", 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: domains must contain between 1 and 10 entries, got 0"
        );
        assert!(check_bulk_len("details", MAX_BULK + 1).is_err());
    }
}
