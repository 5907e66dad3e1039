//! Markdown rendering of cleaned Apollo documents
//!
//! Each top-level document has a formatter returning a single markdown string.
//! Empty results render as a fixed sentinel sentence (e.g. `"No people found."`)
//! that downstream text matching relies on. Records are joined with `"\n---\n"`
//! under one section heading.
//!
//! Fields are rendered in a fixed order and only when present and non-empty.

use crate::model::{
    BulkOrganizationEnrichment, BulkPeopleEnrichment, JobPosting, JobPostings, Organization,
    OrganizationEnrichment, OrganizationSearch, PeopleSearch, Person, PersonEnrichment,
};
use std::fmt::Display;
use std::fmt::Write as _;

const RECORD_SEPARATOR: &str = "\n---\n";

/// Render a people search
#[must_use]
pub fn people_search_to_markdown(data: &PeopleSearch) -> String {
    if data.people.is_empty() {
        return "No people found.".to_string();
    }
    section("People Search Results", data.people.iter().map(person_to_markdown))
}

/// Render an organization search
#[must_use]
pub fn organization_search_to_markdown(data: &OrganizationSearch) -> String {
    if data.organizations.is_empty() {
        return "No organizations found.".to_string();
    }
    section(
        "Organization Search Results",
        data.organizations.iter().map(organization_to_markdown),
    )
}

/// Render an organization's job postings
#[must_use]
pub fn job_postings_to_markdown(data: &JobPostings) -> String {
    if data.job_postings.is_empty() {
        return "No job postings found.".to_string();
    }
    section("Job Postings", data.job_postings.iter().map(job_posting_to_markdown))
}

/// Render a single person enrichment
#[must_use]
pub fn people_enrichment_to_markdown(data: &PersonEnrichment) -> String {
    match &data.person {
        Some(person) => format!("## Person Enrichment Result\n\n{}", person_to_markdown(person)),
        None => "No person data found for enrichment.".to_string(),
    }
}

/// Render a bulk people enrichment
#[must_use]
pub fn bulk_people_enrichment_to_markdown(data: &BulkPeopleEnrichment) -> String {
    if data.matches.is_empty() {
        return "No people found for bulk enrichment.".to_string();
    }
    section(
        "Bulk People Enrichment Results",
        data.matches.iter().map(person_to_markdown),
    )
}

/// Render a single organization enrichment
#[must_use]
pub fn organization_enrichment_to_markdown(data: &OrganizationEnrichment) -> String {
    match &data.organization {
        Some(org) => format!(
            "## Organization Enrichment Result\n\n{}",
            organization_to_markdown(org)
        ),
        None => "No organization data found for enrichment.".to_string(),
    }
}

/// Render a bulk organization enrichment
#[must_use]
pub fn bulk_organization_enrichment_to_markdown(data: &BulkOrganizationEnrichment) -> String {
    if data.organizations.is_empty() {
        return "No organizations found for bulk enrichment.".to_string();
    }
    section(
        "Bulk Organization Enrichment Results",
        data.organizations.iter().map(organization_to_markdown),
    )
}

fn section(heading: &str, records: impl Iterator<Item = String>) -> String {
    let records: Vec<String> = records.collect();
    format!("## {heading}\n\n{}", records.join(RECORD_SEPARATOR))
}

fn person_to_markdown(person: &Person) -> String {
    let mut out = format!("### {}\n", person.name.as_deref().unwrap_or_default());
    line(&mut out, "**Title:**", text(&person.title));
    line(&mut out, "**Headline:**", text(&person.headline));
    line(&mut out, "**LinkedIn:**", text(&person.linkedin_url));
    line(&mut out, "**Location:**", text(&person.location));

    if let Some(org) = &person.current_organization {
        out.push_str("\n**Current Organization:**\n");
        out.push_str(&organization_to_sub_markdown(org));
    }

    if let Some(history) = person.employment_history.as_ref().filter(|h| !h.is_empty()) {
        out.push_str("\n**Employment History:**\n");
        for job in history {
            let _ = write!(
                out,
                "- **{}** at {}",
                job.title.as_deref().unwrap_or_default(),
                job.organization_name.as_deref().unwrap_or_default()
            );
            match text(&job.start_date) {
                Some(start) => {
                    let end = if job.end_date.is_empty() { "Present" } else { &job.end_date };
                    let _ = writeln!(out, " ({start} - {end})");
                }
                None => out.push('\n'),
            }
        }
    }

    out
}

/// Compact bullet form used when an organization is nested inside a person
fn organization_to_sub_markdown(org: &Organization) -> String {
    let mut out = format!("- **Name:** {}\n", org.name.as_deref().unwrap_or_default());
    line(&mut out, "- **Website:**", text(&org.website_url));
    line(&mut out, "- **Industry:**", text(&org.industry));
    line(&mut out, "- **Employees:**", number(org.employees));
    out
}

fn organization_to_markdown(org: &Organization) -> String {
    let mut out = format!("### {}\n", org.name.as_deref().unwrap_or_default());
    line(&mut out, "**Website:**", text(&org.website_url));
    line(&mut out, "**LinkedIn:**", text(&org.linkedin_url));
    line(&mut out, "**Domain:**", text(&org.domain));
    line(&mut out, "**Founded:**", org.founded_year.filter(|year| *year != 0));
    line(&mut out, "**Revenue:**", text(&org.revenue));
    line(&mut out, "**Employees:**", number(org.employees));
    line(&mut out, "**Industry:**", text(&org.industry));
    line(&mut out, "**Latest Funding:**", text(&org.latest_funding));
    line(&mut out, "**Total Funding:**", text(&org.total_funding));

    if let Some(description) = text(&org.description) {
        let _ = write!(out, "\n**Description:**\n{description}\n");
    }
    if let Some(keywords) = org.keywords.as_ref().filter(|k| !k.is_empty()) {
        let _ = write!(out, "\n**Keywords:**\n{}\n", keywords.join(", "));
    }

    out
}

fn job_posting_to_markdown(job: &JobPosting) -> String {
    let mut out = format!("### {}\n", job.title.as_deref().unwrap_or_default());
    line(&mut out, "**Location:**", text(&job.location));
    line(&mut out, "**Posted:**", text(&job.posted_date));
    line(&mut out, "**URL:**", text(&job.url));
    if let Some(content) = text(&job.content) {
        let _ = write!(out, "\n{content}\n");
    }
    out
}

fn line(out: &mut String, label: &str, value: Option<impl Display>) {
    if let Some(value) = value {
        let _ = writeln!(out, "{label} {value}");
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn number(value: Option<u64>) -> Option<u64> {
    value.filter(|n| *n != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmploymentEntry;

    fn ada() -> Person {
        Person {
            name: Some("Ada Lovelace".to_string()),
            title: Some("CTO".to_string()),
            linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
            location: Some("London, England, UK".to_string()),
            ..Person::default()
        }
    }

    fn acme() -> Organization {
        Organization {
            name: Some("Acme".to_string()),
            website_url: Some("https://acme.com".to_string()),
            industry: Some("manufacturing".to_string()),
            employees: Some(120),
            revenue: Some("1M".to_string()),
            description: Some("Anvils and rockets".to_string()),
            keywords: Some(vec!["anvils".to_string(), "rockets".to_string()]),
            ..Organization::default()
        }
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(people_search_to_markdown(&PeopleSearch::default()), "No people found.");
        assert_eq!(
            organization_search_to_markdown(&OrganizationSearch::default()),
            "No organizations found."
        );
        assert_eq!(job_postings_to_markdown(&JobPostings::default()), "No job postings found.");
        assert_eq!(
            people_enrichment_to_markdown(&PersonEnrichment::default()),
            "No person data found for enrichment."
        );
        assert_eq!(
            bulk_people_enrichment_to_markdown(&BulkPeopleEnrichment::default()),
            "No people found for bulk enrichment."
        );
        assert_eq!(
            organization_enrichment_to_markdown(&OrganizationEnrichment::default()),
            "No organization data found for enrichment."
        );
        assert_eq!(
            bulk_organization_enrichment_to_markdown(&BulkOrganizationEnrichment::default()),
            "No organizations found for bulk enrichment."
        );
    }

    #[test]
    fn test_person_field_order() {
        let markdown = people_search_to_markdown(&PeopleSearch { people: vec![ada()] });
        assert_eq!(
            markdown,
            "## People Search Results\n\n\
             ### Ada Lovelace\n\
             **Title:** CTO\n\
             **LinkedIn:** https://linkedin.com/in/ada\n\
             **Location:** London, England, UK\n"
        );
    }

    #[test]
    fn test_person_with_employer_and_history() {
        let person = Person {
            current_organization: Some(acme()),
            employment_history: Some(vec![
                EmploymentEntry {
                    title: Some("CTO".to_string()),
                    organization_name: Some("Acme".to_string()),
                    start_date: Some("2020-01-01".to_string()),
                    end_date: "Present".to_string(),
                },
                EmploymentEntry {
                    title: Some("Intern".to_string()),
                    organization_name: Some("Initech".to_string()),
                    start_date: None,
                    end_date: "Present".to_string(),
                },
            ]),
            ..ada()
        };

        let markdown = people_enrichment_to_markdown(&PersonEnrichment { person: Some(person) });
        assert_eq!(
            markdown,
            "## Person Enrichment Result\n\n\
             ### Ada Lovelace\n\
             **Title:** CTO\n\
             **LinkedIn:** https://linkedin.com/in/ada\n\
             **Location:** London, England, UK\n\
             \n**Current Organization:**\n\
             - **Name:** Acme\n\
             - **Website:** https://acme.com\n\
             - **Industry:** manufacturing\n\
             - **Employees:** 120\n\
             \n**Employment History:**\n\
             - **CTO** at Acme (2020-01-01 - Present)\n\
             - **Intern** at Initech\n"
        );
    }

    #[test]
    fn test_full_organization_form() {
        let markdown = organization_enrichment_to_markdown(&OrganizationEnrichment {
            organization: Some(acme()),
        });
        assert_eq!(
            markdown,
            "## Organization Enrichment Result\n\n\
             ### Acme\n\
             **Website:** https://acme.com\n\
             **Revenue:** 1M\n\
             **Employees:** 120\n\
             **Industry:** manufacturing\n\
             \n**Description:**\nAnvils and rockets\n\
             \n**Keywords:**\nanvils, rockets\n"
        );
    }

    #[test]
    fn test_records_joined_with_separator() {
        let other = Person {
            name: Some("Grace Hopper".to_string()),
            ..Person::default()
        };
        let markdown = bulk_people_enrichment_to_markdown(&BulkPeopleEnrichment {
            matches: vec![ada(), other],
        });

        assert!(markdown.starts_with("## Bulk People Enrichment Results\n\n### Ada Lovelace\n"));
        assert!(markdown.ends_with("\n---\n### Grace Hopper\n"));
        assert_eq!(markdown.matches("\n---\n").count(), 1);
    }

    #[test]
    fn test_job_posting() {
        let markdown = job_postings_to_markdown(&JobPostings {
            job_postings: vec![JobPosting {
                title: Some("Rust Engineer".to_string()),
                url: Some("https://jobs.example.com/1".to_string()),
                location: Some("Remote".to_string()),
                content: Some("Build things.".to_string()),
                posted_date: Some("2024-05-01".to_string()),
            }],
        });
        assert_eq!(
            markdown,
            "## Job Postings\n\n\
             ### Rust Engineer\n\
             **Location:** Remote\n\
             **Posted:** 2024-05-01\n\
             **URL:** https://jobs.example.com/1\n\
             \nBuild things.\n"
        );
    }
}
