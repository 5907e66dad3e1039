//! Cleaners for the enrichment endpoints

use super::helpers::{clean_organization, clean_person};
use crate::model::{
    BulkOrganizationEnrichment, BulkPeopleEnrichment, OrganizationEnrichment, PersonEnrichment,
};
use crate::raw::{
    RawBulkOrganizationEnrichment, RawBulkPeopleEnrichment, RawOrganizationEnrichment,
    RawPersonEnrichment,
};
use outreach_core::json::decode;
use serde_json::Value;

/// Clean a person enrichment response; `{"person": null}` when there is no match
#[must_use]
pub fn clean_people_enrichment(response: &Value) -> PersonEnrichment {
    let raw: RawPersonEnrichment = decode(response);
    PersonEnrichment {
        person: raw.person.as_ref().map(clean_person),
    }
}

/// Clean a bulk person enrichment response
#[must_use]
pub fn clean_bulk_people_enrichment(response: &Value) -> BulkPeopleEnrichment {
    let raw: RawBulkPeopleEnrichment = decode(response);
    BulkPeopleEnrichment {
        matches: raw
            .matches
            .unwrap_or_default()
            .iter()
            .map(clean_person)
            .collect(),
    }
}

/// Clean an organization enrichment response; `{"organization": null}` when there is no match
#[must_use]
pub fn clean_organization_enrichment(response: &Value) -> OrganizationEnrichment {
    let raw: RawOrganizationEnrichment = decode(response);
    OrganizationEnrichment {
        organization: raw.organization.as_ref().map(clean_organization),
    }
}

/// Clean a bulk organization enrichment response
#[must_use]
pub fn clean_bulk_organization_enrichment(response: &Value) -> BulkOrganizationEnrichment {
    let raw: RawBulkOrganizationEnrichment = decode(response);
    BulkOrganizationEnrichment {
        organizations: raw
            .organizations
            .unwrap_or_default()
            .iter()
            .map(clean_organization)
            .collect(),
    }
}
