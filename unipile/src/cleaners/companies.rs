//! Cleaners for company profiles and searches, and the generic action ack

use super::{decode_present, prefer};
use crate::model::{ActionAck, CompanyProfile, CompanySearch, CompanySummary, LocationSummary};
use crate::raw::{RawAck, RawCompany, RawCompanySearchItem, RawList};
use outreach_core::json::{decode, non_empty};
use serde_json::Value;

/// Clean a company profile; `None` for an empty response
///
/// `headquarters` is the first location flagged as such, kept with the source's
/// field names. Every location is also reduced into `locations`.
#[must_use]
pub fn clean_company_profile(response: &Value) -> Option<CompanyProfile> {
    decode_present(response).map(company_profile)
}

fn company_profile(raw: RawCompany) -> CompanyProfile {
    let locations = raw.locations.unwrap_or_default();

    CompanyProfile {
        logo_url: prefer(raw.logo_large.as_ref(), raw.logo.as_ref()),
        id: raw.id,
        entity_urn: raw.entity_urn,
        name: raw.name,
        description: raw.description,
        public_identifier: raw.public_identifier,
        industry: raw.industry.unwrap_or_default(),
        website: raw.website,
        employee_count: raw.employee_count,
        employee_count_range: raw.employee_count_range,
        founded_year: raw.founded_year,
        headquarters: locations
            .iter()
            .find(|location| location.is_headquarter == Some(true))
            .cloned(),
        locations: locations
            .into_iter()
            .map(|location| LocationSummary {
                city: location.city,
                country: location.country,
                is_headquarter: location.is_headquarter,
            })
            .collect(),
        hashtags: raw
            .hashtags
            .unwrap_or_default()
            .into_iter()
            .map(|hashtag| hashtag.title)
            .collect(),
        profile_url: raw.profile_url,
        followers_count: raw.follower_count,
    }
}

/// Clean a company search into `{"companies": [...], "paging": ..., "cursor": ...}`
#[must_use]
pub fn clean_company_search_results(response: &Value) -> CompanySearch {
    let raw: RawList<RawCompanySearchItem> = decode(response);
    CompanySearch {
        companies: raw.items.unwrap_or_default().into_iter().map(company_summary).collect(),
        paging: raw.paging,
        cursor: raw.cursor,
    }
}

fn company_summary(raw: RawCompanySearchItem) -> CompanySummary {
    CompanySummary {
        description: non_empty(raw.description.as_deref())
            .map(str::to_string)
            .or(raw.summary),
        logo_url: prefer(raw.logo_large.as_ref(), raw.logo.as_ref()),
        name: raw.name,
        industry: raw.industry.unwrap_or_default(),
        location: raw.location,
        profile_url: raw.profile_url,
        public_identifier: raw.public_identifier,
        id: raw.id,
        followers_count: raw.followers_count,
        job_offers_count: raw.job_offers_count,
    }
}

/// Clean an acknowledgement that only carries its object type
///
/// Used for follow/unfollow, `InMail` and comment creation.
#[must_use]
pub fn clean_action_response(response: &Value) -> Option<ActionAck> {
    decode_present(response).map(|raw: RawAck| ActionAck {
        success: true,
        object: raw.object,
    })
}
