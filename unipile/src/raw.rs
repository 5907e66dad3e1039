//! Raw Unipile response records
//!
//! Only the fields the cleaners read are modeled. Scalars go through [`lenient`]
//! because Unipile reports some of them as strings or integers depending on the
//! provider, and a mistyped value must drop only that field. Lists go through
//! [`lenient_vec`]. Fields typed `Value` are passed through untouched.

#![allow(missing_docs)] // Field names mirror the Unipile API

use crate::model::{CompanyLocation, EmployeeCountRange, Paging};
use outreach_core::json::{lenient, lenient_vec};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `{"items": [...], "cursor": ..., "paging": ...}` envelope of list endpoints
#[derive(Clone, Debug, Deserialize)]
#[serde(default, bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct RawList<T> {
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Option<Vec<T>>,
    #[serde(deserialize_with = "lenient")]
    pub cursor: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub paging: Option<Paging>,
}

impl<T> Default for RawList<T> {
    fn default() -> Self {
        Self {
            items: None,
            cursor: None,
            paging: None,
        }
    }
}

/// A user profile, also used for the account owner
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUserProfile {
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url_large: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub provider_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub member_urn: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub follower_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub connections_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub is_premium: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_influencer: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_creator: Option<bool>,
}

/// One connection from `GET /users/relations`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRelation {
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_profile_url: Option<String>,
    pub connection_degree: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub member_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub member_urn: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub connection_urn: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<i64>,
}

/// Sender or recipient of an invitation
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawInvitationParty {
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url: Option<String>,
}

/// One sent or received invitation
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawInvitation {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub shared_secret: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sent_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sender: Option<RawInvitationParty>,
    #[serde(deserialize_with = "lenient")]
    pub recipient: Option<RawInvitationParty>,
}

/// Acknowledgement returned by the write endpoints
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAck {
    #[serde(deserialize_with = "lenient")]
    pub object: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub invitation_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub post_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub chat_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub message_id: Option<String>,
}

/// One result of a people search
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchPerson {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_profile_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url_large: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub network_distance: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub member_urn: Option<String>,
}

/// Author of a post, or of a comment when the API sends it as an object
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_company: Option<bool>,
}

/// Width/height of an image or video attachment
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSize {
    #[serde(deserialize_with = "lenient")]
    pub width: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<u64>,
}

/// An attachment on a post
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAttachment {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub mimetype: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<RawSize>,
}

/// A post
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPost {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub parsed_datetime: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub share_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub comment_counter: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub reaction_counter: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub repost_counter: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub impressions_counter: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<RawAuthor>,
    #[serde(deserialize_with = "lenient_vec")]
    pub attachments: Option<Vec<RawAttachment>>,
    #[serde(deserialize_with = "lenient")]
    pub is_repost: Option<bool>,
}

/// Extra author details sent alongside a comment's author name
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCommentAuthorDetails {
    #[serde(deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_company: Option<bool>,
}

/// A comment on a post
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawComment {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub parsed_datetime: Option<String>,
    /// Either an author object or just the author's name
    pub author: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub author_details: Option<RawCommentAuthorDetails>,
    #[serde(deserialize_with = "lenient")]
    pub reaction_counter: Option<u64>,
}

/// A chat participant
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAttendee {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture_url: Option<String>,
}

/// Last message preview embedded in a chat
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLastMessage {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sender_id: Option<String>,
}

/// A chat (conversation)
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawChat {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub unread_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub attendee_provider_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub provider_id: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub attendees: Option<Vec<RawAttendee>>,
    #[serde(deserialize_with = "lenient")]
    pub last_message: Option<RawLastMessage>,
}

/// A chat message
///
/// The status flags are `0`/`1` integers on LinkedIn and passed through as-is.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    pub is_sender: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub sender_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sender_attendee_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub chat_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub chat_provider_id: Option<String>,
    pub seen: Option<Value>,
    pub delivered: Option<Value>,
    pub edited: Option<Value>,
    pub deleted: Option<Value>,
    #[serde(deserialize_with = "lenient_vec")]
    pub attachments: Option<Vec<Value>>,
}

/// A company hashtag
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawHashtag {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// A company profile
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCompany {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub industry: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub employee_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub employee_count_range: Option<EmployeeCountRange>,
    #[serde(deserialize_with = "lenient")]
    pub founded_year: Option<i64>,
    #[serde(deserialize_with = "lenient_vec")]
    pub locations: Option<Vec<CompanyLocation>>,
    #[serde(deserialize_with = "lenient_vec")]
    pub hashtags: Option<Vec<RawHashtag>>,
    #[serde(deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub logo_large: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub follower_count: Option<u64>,
}

/// One result of a company search
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCompanySearchItem {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub industry: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub logo_large: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub followers_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub job_offers_count: Option<u64>,
}

/// Industries come back as a list on profiles and as a single string on search results
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(vec![s]),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
