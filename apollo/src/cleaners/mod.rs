//! Response cleaners
//!
//! Pure functions turning raw Apollo JSON into the documents in [`crate::model`].
//! They never fail: a missing, `null` or malformed body yields the documented empty
//! shape (`{"people": []}`, `{"person": null}`, ...).

mod enrich;
mod helpers;
mod search;

pub use enrich::{
    clean_bulk_organization_enrichment, clean_bulk_people_enrichment,
    clean_organization_enrichment, clean_people_enrichment,
};
pub use helpers::{clean_organization, clean_person, KEYWORD_LIMIT};
pub use search::{clean_job_postings, clean_organization_search, clean_people_search};
