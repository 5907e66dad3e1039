//! # Apollo API Client
//!
//! Client for the Apollo contact and company database. Every operation returns
//! either the untouched API response or a cleaned, LLM-friendly document
//! ([`Payload`]), and every cleaned document has a markdown rendering.
//!
//! ## Example
//!
//! ```no_run
//! use outreach_apollo::{ApolloClient, PeopleSearchParams};
//! use outreach_apollo::markdown::people_search_to_markdown;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads APOLLO_API_KEY (and optionally APOLLO_ENDPOINT)
//!     let client = ApolloClient::from_env()?;
//!
//!     let params = PeopleSearchParams {
//!         person_titles: vec!["CTO".to_string()],
//!         ..PeopleSearchParams::default()
//!     };
//!
//!     if let Some(people) = client.people_search(&params).await?.cleaned() {
//!         println!("{}", people_search_to_markdown(people));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! - People search, organization search, organization job postings
//! - Single and bulk enrichment for people and organizations

pub mod cleaners;
pub mod client;
pub mod config;
pub mod enrich;
pub mod error;
pub mod markdown;
pub mod model;
pub mod raw;
pub mod search;

pub use client::ApolloClient;
pub use config::ApolloConfig;
pub use enrich::{
    BulkOrganizationEnrichmentParams, BulkPeopleEnrichmentParams, OrganizationEnrichmentParams,
    PeopleEnrichmentParams, PersonIdentity,
};
pub use error::ApolloError;
pub use outreach_core::Payload;
pub use search::{OrganizationJobPostingsParams, OrganizationSearchParams, PeopleSearchParams};
