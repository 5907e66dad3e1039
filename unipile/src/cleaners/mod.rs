//! Response cleaners
//!
//! Pure functions turning raw Unipile JSON into the documents in [`crate::model`].
//! List cleaners never fail and fall back to an empty list (`{"chats": []}`);
//! single-record cleaners return `None` (serialized as `null`) when the response
//! itself is empty.

mod companies;
mod messages;
mod posts;
mod users;

pub use companies::{clean_action_response, clean_company_profile, clean_company_search_results};
pub use messages::{
    clean_chat_messages, clean_chats, clean_create_chat_response, clean_send_message_response,
};
pub use posts::{
    clean_comment_on_post_response, clean_create_post_response, clean_post, clean_post_comments,
    clean_user_posts,
};
pub use users::{
    clean_account_owner_profile, clean_invitations_received, clean_invitations_sent,
    clean_people_search, clean_send_invitation_response, clean_user_profile, clean_user_relations,
};

use outreach_core::json::{decode, non_empty, truthy};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `"{first} {last}"`, with an empty string standing in for a missing half
fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
}

/// The preferred variant when it is non-empty, otherwise the fallback
fn prefer(preferred: Option<&String>, fallback: Option<&String>) -> Option<String> {
    non_empty(preferred.map(String::as_str))
        .map(str::to_string)
        .or_else(|| fallback.cloned())
}

/// Decode a single-record response, `None` when the response is empty
fn decode_present<T>(response: &Value) -> Option<T>
where
    T: DeserializeOwned + Default,
{
    truthy(response).then(|| decode(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_never_omits() {
        assert_eq!(full_name(Some("Jane"), Some("Doe")), "Jane Doe");
        assert_eq!(full_name(Some("Jane"), None), "Jane ");
        assert_eq!(full_name(None, None), " ");
    }

    #[test]
    fn test_prefer_large_variant() {
        let large = "large.png".to_string();
        let small = "small.png".to_string();
        let empty = String::new();

        assert_eq!(prefer(Some(&large), Some(&small)).as_deref(), Some("large.png"));
        assert_eq!(prefer(None, Some(&small)).as_deref(), Some("small.png"));
        assert_eq!(prefer(Some(&empty), Some(&small)).as_deref(), Some("small.png"));
        assert_eq!(prefer(None, None), None);
    }
}
