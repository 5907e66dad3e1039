//! # Unipile LinkedIn Client
//!
//! Client for the Unipile API, scoped to LinkedIn: profiles and search,
//! connections and invitations, posts and comments, chats and messages, and
//! company pages.
//!
//! Every call acts as a LinkedIn account. The account comes from
//! [`CallOptions::account_id`] when set, otherwise from the client's default
//! (`UNIPILE_ACCOUNT_ID`); with neither, the call fails with
//! [`UnipileError::MissingAccountId`] before any request goes out.
//!
//! ## Example
//!
//! ```no_run
//! use outreach_unipile::{CallOptions, Page, UnipileClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads UNIPILE_DSN, UNIPILE_API_KEY and UNIPILE_ACCOUNT_ID
//!     let client = UnipileClient::from_env()?;
//!
//!     let chats = client.get_chats(&Page::limit(20), &CallOptions::default()).await?;
//!     println!("{}", serde_json::to_string_pretty(&chats)?);
//!     Ok(())
//! }
//! ```
//!
//! Single-record operations clean to `None` when the API answers with an empty
//! body; list operations always clean to a document with an empty list.

pub mod cleaners;
pub mod client;
pub mod companies;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod posts;
pub mod raw;
pub mod users;

pub use client::{CallOptions, Page, UnipileClient};
pub use config::UnipileConfig;
pub use error::UnipileError;
pub use messages::{MessageAttachment, MessageType, SendMessageOptions};
pub use outreach_core::Payload;
pub use posts::Visibility;
pub use users::{DEFAULT_SEARCH_LIMIT, SearchApi, SearchCategory, SearchParams};
