//! Cleaners for the search endpoints

use super::helpers::{clean_organization, clean_person};
use crate::model::{JobPosting, JobPostings, OrganizationSearch, PeopleSearch};
use crate::raw::{RawJobPosting, RawJobPostings, RawOrganizationSearch, RawPeopleSearch};
use outreach_core::json::decode;
use serde_json::Value;

/// Clean a people search response (`{"people": [...]}`)
#[must_use]
pub fn clean_people_search(response: &Value) -> PeopleSearch {
    let raw: RawPeopleSearch = decode(response);
    PeopleSearch {
        people: raw
            .people
            .unwrap_or_default()
            .iter()
            .map(clean_person)
            .collect(),
    }
}

/// Clean an organization search response (`{"organizations": [...]}`)
#[must_use]
pub fn clean_organization_search(response: &Value) -> OrganizationSearch {
    let raw: RawOrganizationSearch = decode(response);
    OrganizationSearch {
        organizations: raw
            .organizations
            .unwrap_or_default()
            .iter()
            .map(clean_organization)
            .collect(),
    }
}

/// Clean a job postings response (`{"organization_job_postings": [...]}`)
/// into `{"job_postings": [...]}`
#[must_use]
pub fn clean_job_postings(response: &Value) -> JobPostings {
    let raw: RawJobPostings = decode(response);
    JobPostings {
        job_postings: raw
            .organization_job_postings
            .unwrap_or_default()
            .into_iter()
            .map(clean_job_posting)
            .collect(),
    }
}

fn clean_job_posting(job: RawJobPosting) -> JobPosting {
    JobPosting {
        title: job.title,
        url: job.url,
        location: job.location,
        content: job.content,
        posted_date: job.posted_date,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_people_search_empty_shapes() {
        let empty = json!({"people": []});
        assert_eq!(serde_json::to_value(clean_people_search(&json!({}))).unwrap(), empty);
        assert_eq!(serde_json::to_value(clean_people_search(&Value::Null)).unwrap(), empty);
        let cleaned = clean_people_search(&json!({"people": null}));
        assert_eq!(serde_json::to_value(cleaned).unwrap(), empty);
    }

    #[test]
    fn test_people_search_end_to_end() {
        let raw = json!({
            "people": [{
                "name": "Tim Zheng",
                "title": "CEO",
                "city": "SF",
                "state": "CA",
                "country": "US",
                "employment_history": null
            }],
            "pagination": {"page": 1, "per_page": 10}
        });

        let cleaned = serde_json::to_value(clean_people_search(&raw)).unwrap();
        assert_eq!(
            cleaned,
            json!({"people": [{"name": "Tim Zheng", "title": "CEO", "location": "SF, CA, US"}]})
        );
    }

    #[test]
    fn test_organization_search_empty_shapes() {
        let empty = json!({"organizations": []});
        assert_eq!(serde_json::to_value(clean_organization_search(&json!({}))).unwrap(), empty);
        assert_eq!(
            serde_json::to_value(clean_organization_search(&json!({"organizations": []}))).unwrap(),
            empty
        );
    }

    #[test]
    fn test_organization_search_cleans_each() {
        let raw = json!({
            "organizations": [
                {"name": "Acme", "organization_revenue_printed": "1M"},
                {"name": "Initech", "primary_domain": "initech.com"}
            ]
        });

        let cleaned = clean_organization_search(&raw);
        assert_eq!(cleaned.organizations.len(), 2);
        assert_eq!(cleaned.organizations[0].revenue.as_deref(), Some("1M"));
        assert_eq!(cleaned.organizations[1].domain.as_deref(), Some("initech.com"));
    }

    #[test]
    fn test_job_postings_renamed_and_omitted() {
        let raw = json!({
            "organization_job_postings": [{
                "id": "abc",
                "title": "Rust Engineer",
                "url": "https://jobs.example.com/1",
                "location": null,
                "posted_date": "2024-05-01",
                "last_seen_at": "2024-05-02"
            }]
        });

        let cleaned = serde_json::to_value(clean_job_postings(&raw)).unwrap();
        assert_eq!(
            cleaned,
            json!({"job_postings": [{
                "title": "Rust Engineer",
                "url": "https://jobs.example.com/1",
                "posted_date": "2024-05-01"
            }]})
        );
    }

    #[test]
    fn test_job_postings_empty_shape() {
        let cleaned = clean_job_postings(&json!({"organization_job_postings": []}));
        assert_eq!(serde_json::to_value(cleaned).unwrap(), json!({"job_postings": []}));
    }

    #[test]
    fn test_cleaning_cleaned_output_is_stable() {
        let raw = json!({
            "people": [{
                "name": "Tim Zheng",
                "title": "CEO",
                "city": "SF",
                "state": "CA",
                "country": "US"
            }]
        });

        let once = serde_json::to_value(clean_people_search(&raw)).unwrap();
        let twice = serde_json::to_value(clean_people_search(&once)).unwrap();

        // The derived location is not re-derivable, but nothing omitted reappears.
        assert_eq!(twice, json!({"people": [{"name": "Tim Zheng", "title": "CEO"}]}));
    }
}
