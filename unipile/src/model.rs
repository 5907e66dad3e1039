//! Cleaned Unipile documents
//!
//! Field names are camelCase. Plain optional values are left out when the source
//! has none, nested objects (`author`, `sender`, `lastMessage`, `headquarters`, ...)
//! serialize as an explicit `null`, and collections always serialize, empty when
//! the source has none.

#![allow(missing_docs)] // Fields are named after their serialized keys

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A LinkedIn user profile
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `"{first} {last}"`, always present
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Large picture when available, otherwise the default one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
    /// Identifier the other endpoints expect for this user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_urn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_influencer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_creator: Option<bool>,
}

/// The authenticated account's own profile
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountOwnerProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_urn: Option<String>,
}

/// One first-degree connection
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Connection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_degree: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_urn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_urn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// Cleaned `GET /users/relations`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Relations {
    pub connections: Vec<Connection>,
}

/// The other side of an invitation
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct InvitationParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

/// Fields common to sent and received invitations
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct InvitationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
}

/// An invitation someone sent to the account
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReceivedInvitation {
    #[serde(flatten)]
    pub details: InvitationDetails,
    pub sender: Option<InvitationParty>,
}

/// An invitation the account sent
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SentInvitation {
    #[serde(flatten)]
    pub details: InvitationDetails,
    pub recipient: Option<InvitationParty>,
}

/// Cleaned `GET /users/invite/received`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InvitationsReceived {
    pub invitations: Vec<ReceivedInvitation>,
}

/// Cleaned `GET /users/invite/sent`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InvitationsSent {
    pub invitations: Vec<SentInvitation>,
}

/// Pagination block passed through from search responses
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Paging {
    #[serde(
        deserialize_with = "outreach_core::json::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<u64>,
    #[serde(
        deserialize_with = "outreach_core::json::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_count: Option<u64>,
    #[serde(
        deserialize_with = "outreach_core::json::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_count: Option<u64>,
}

/// One person in a LinkedIn search
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
    /// Public profile URL when available, otherwise the internal one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_urn: Option<String>,
}

/// Cleaned people search
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeopleSearch {
    pub people: Vec<SearchPerson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Author of a post or comment
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_company: Option<bool>,
}

/// Engagement counters of a post
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PostStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<u64>,
}

/// A post attachment; file and media attachments carry extra fields
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PostAttachment {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Only for `file` attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Only for `file` attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Only for `img` and `video` attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    /// Only for `img` and `video` attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
}

/// A LinkedIn post
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    pub stats: PostStats,
    pub author: Option<Author>,
    pub attachments: Vec<PostAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_repost: Option<bool>,
}

/// Cleaned post listing; a `null` item in the source stays `null`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Posts {
    pub posts: Vec<Option<Post>>,
}

/// Reaction count of a comment, `0` when unknown
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommentStats {
    pub reactions: u64,
}

/// A comment
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_date_time: Option<String>,
    pub author: Option<Author>,
    pub stats: CommentStats,
}

/// Cleaned comment listing (post comments or a user's comments)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Comments {
    pub comments: Vec<Comment>,
}

/// A chat participant
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatAttendee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `"{first} {last}"`
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

/// Preview of a chat's most recent message
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LastMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
}

/// A conversation
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Chat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub attendees: Vec<ChatAttendee>,
    pub last_message: Option<LastMessage>,
}

/// Cleaned `GET /chats`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Chats {
    pub chats: Vec<Chat>,
}

/// A message in a chat
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sender: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_attendee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Value>,
    /// Passed through untouched
    pub attachments: Vec<Value>,
}

/// Cleaned `GET /chats/{id}/messages`; a `null` item in the source stays `null`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChatMessages {
    pub messages: Vec<Option<Message>>,
    /// Cursor for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Employee count bracket; an open-ended bracket has `to: null`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmployeeCountRange {
    #[serde(deserialize_with = "outreach_core::json::lenient")]
    pub from: Option<u64>,
    #[serde(deserialize_with = "outreach_core::json::lenient")]
    pub to: Option<u64>,
}

/// A company location exactly as the API reports it
///
/// Also the shape of the cleaned `headquarters` field, so source field names are kept.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompanyLocation {
    #[serde(
        deserialize_with = "outreach_core::json::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_headquarter: Option<bool>,
    #[serde(
        deserialize_with = "outreach_core::json::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,
    #[serde(
        deserialize_with = "outreach_core::json::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    /// Street, postal code, area and anything else the API sends
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Location reduced to city/country/HQ flag
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_headquarter: Option<bool>,
}

/// A LinkedIn company profile
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_urn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
    pub industry: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count_range: Option<EmployeeCountRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i64>,
    /// First location flagged as headquarters
    pub headquarters: Option<CompanyLocation>,
    pub locations: Vec<LocationSummary>,
    /// Hashtag titles in source order; an untitled hashtag stays `null`
    pub hashtags: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
}

/// One company in a search
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description, or the summary when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub industry: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_offers_count: Option<u64>,
}

/// Cleaned company search
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompanySearch {
    pub companies: Vec<CompanySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Acknowledgement of `POST /users/invite`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SendInvitationAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_id: Option<String>,
}

/// Acknowledgement of `POST /posts`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePostAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

/// Acknowledgement of `POST /chats`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateChatAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Acknowledgement of `POST /chats/{id}/messages`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SendMessageAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// `message_id`, or `id` when the API only sends that
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Acknowledgement carrying only the object type (comments, `InMail`, follow/unfollow)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ActionAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}
