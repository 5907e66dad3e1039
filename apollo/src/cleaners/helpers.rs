//! Person and organization projections shared by the search and enrichment cleaners

use crate::model::{EmploymentEntry, Organization, Person};
use crate::raw::{RawEmployment, RawOrganization, RawPerson};
use outreach_core::json::non_empty;

/// Organizations keep at most this many keywords
pub const KEYWORD_LIMIT: usize = 10;

const CURRENT_JOB_END: &str = "Present";

/// Project a raw person onto the cleaned shape.
///
/// `location` is only set when city, state and country are all non-empty; the
/// embedded employer goes through [`clean_organization`].
#[must_use]
pub fn clean_person(person: &RawPerson) -> Person {
    let location = match (
        non_empty(person.city.as_deref()),
        non_empty(person.state.as_deref()),
        non_empty(person.country.as_deref()),
    ) {
        (Some(city), Some(state), Some(country)) => Some(format!("{city}, {state}, {country}")),
        _ => None,
    };

    Person {
        name: person.name.clone(),
        title: person.title.clone(),
        headline: person.headline.clone(),
        linkedin_url: person.linkedin_url.clone(),
        location,
        current_organization: person.organization.as_ref().map(clean_organization),
        employment_history: person
            .employment_history
            .as_ref()
            .map(|jobs| jobs.iter().map(clean_employment).collect()),
    }
}

fn clean_employment(job: &RawEmployment) -> EmploymentEntry {
    EmploymentEntry {
        title: job.title.clone(),
        organization_name: job.organization_name.clone(),
        start_date: job.start_date.clone(),
        end_date: non_empty(job.end_date.as_deref())
            .unwrap_or(CURRENT_JOB_END)
            .to_string(),
    }
}

/// Project a raw organization onto the cleaned shape.
///
/// `revenue` takes the enrichment-style `annual_revenue_printed` when it is
/// non-empty, otherwise the search-style `organization_revenue_printed`.
#[must_use]
pub fn clean_organization(org: &RawOrganization) -> Organization {
    let revenue = non_empty(org.annual_revenue_printed.as_deref())
        .map(str::to_string)
        .or_else(|| org.organization_revenue_printed.clone());

    Organization {
        name: org.name.clone(),
        website_url: org.website_url.clone(),
        linkedin_url: org.linkedin_url.clone(),
        domain: org.primary_domain.clone(),
        founded_year: org.founded_year,
        revenue,
        employees: org.estimated_num_employees,
        industry: org.industry.clone(),
        latest_funding: org.latest_funding_stage.clone(),
        total_funding: org.total_funding_printed.clone(),
        description: org.short_description.clone(),
        keywords: org
            .keywords
            .as_ref()
            .map(|keywords| keywords.iter().take(KEYWORD_LIMIT).cloned().collect()),
    }
}
