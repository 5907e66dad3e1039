//! Cleaners for profiles, relations, invitations and people search

use super::{decode_present, full_name, prefer};
use crate::model::{
    AccountOwnerProfile, Connection, InvitationDetails, InvitationParty, InvitationsReceived,
    InvitationsSent, PeopleSearch, ReceivedInvitation, Relations, SearchPerson, SendInvitationAck,
    SentInvitation, UserProfile,
};
use crate::raw::{
    RawAck, RawInvitation, RawInvitationParty, RawList, RawRelation, RawSearchPerson,
    RawUserProfile,
};
use outreach_core::json::decode;
use serde_json::Value;

/// Clean a user profile; `None` for an empty response
#[must_use]
pub fn clean_user_profile(response: &Value) -> Option<UserProfile> {
    decode_present(response).map(|raw: RawUserProfile| user_profile(&raw))
}

/// Clean the account owner's profile: a user profile plus `entityUrn`
#[must_use]
pub fn clean_account_owner_profile(response: &Value) -> Option<AccountOwnerProfile> {
    decode_present(response).map(|raw: RawUserProfile| AccountOwnerProfile {
        profile: user_profile(&raw),
        entity_urn: raw.entity_urn,
    })
}

fn user_profile(raw: &RawUserProfile) -> UserProfile {
    UserProfile {
        first_name: raw.first_name.clone(),
        last_name: raw.last_name.clone(),
        full_name: full_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
        headline: raw.headline.clone(),
        location: raw.location.clone(),
        profile_picture_url: prefer(
            raw.profile_picture_url_large.as_ref(),
            raw.profile_picture_url.as_ref(),
        ),
        public_identifier: raw.public_identifier.clone(),
        provider_id: raw.provider_id.clone(),
        member_urn: raw.member_urn.clone(),
        follower_count: raw.follower_count,
        connections_count: raw.connections_count,
        is_premium: raw.is_premium,
        is_influencer: raw.is_influencer,
        is_creator: raw.is_creator,
    }
}

/// Clean `GET /users/relations` into `{"connections": [...]}`
#[must_use]
pub fn clean_user_relations(response: &Value) -> Relations {
    let raw: RawList<RawRelation> = decode(response);
    Relations {
        connections: raw.items.unwrap_or_default().into_iter().map(connection).collect(),
    }
}

fn connection(raw: RawRelation) -> Connection {
    Connection {
        full_name: full_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
        first_name: raw.first_name,
        last_name: raw.last_name,
        headline: raw.headline,
        profile_picture_url: raw.profile_picture_url,
        public_identifier: raw.public_identifier,
        public_profile_url: raw.public_profile_url,
        connection_degree: raw.connection_degree,
        member_id: raw.member_id,
        member_urn: raw.member_urn,
        connection_urn: raw.connection_urn,
        created_at: raw.created_at,
    }
}

/// Clean `GET /users/invite/received` into `{"invitations": [...]}` with a `sender` each
#[must_use]
pub fn clean_invitations_received(response: &Value) -> InvitationsReceived {
    let raw: RawList<RawInvitation> = decode(response);
    InvitationsReceived {
        invitations: raw
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|mut invitation| ReceivedInvitation {
                sender: invitation.sender.take().map(party),
                details: details(invitation),
            })
            .collect(),
    }
}

/// Clean `GET /users/invite/sent` into `{"invitations": [...]}` with a `recipient` each
#[must_use]
pub fn clean_invitations_sent(response: &Value) -> InvitationsSent {
    let raw: RawList<RawInvitation> = decode(response);
    InvitationsSent {
        invitations: raw
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|mut invitation| SentInvitation {
                recipient: invitation.recipient.take().map(party),
                details: details(invitation),
            })
            .collect(),
    }
}

fn details(raw: RawInvitation) -> InvitationDetails {
    InvitationDetails {
        id: raw.id,
        shared_secret: raw.shared_secret,
        message: raw.message,
        sent_at: raw.sent_at,
    }
}

fn party(raw: RawInvitationParty) -> InvitationParty {
    InvitationParty {
        full_name: full_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
        first_name: raw.first_name,
        last_name: raw.last_name,
        headline: raw.headline,
        profile_picture_url: raw.profile_picture_url,
    }
}

/// Clean the acknowledgement of `POST /users/invite`
#[must_use]
pub fn clean_send_invitation_response(response: &Value) -> Option<SendInvitationAck> {
    decode_present(response).map(|raw: RawAck| SendInvitationAck {
        success: true,
        object: raw.object,
        invitation_id: raw.invitation_id,
    })
}

/// Clean a people search into `{"people": [...], "paging": ..., "cursor": ...}`
#[must_use]
pub fn clean_people_search(response: &Value) -> PeopleSearch {
    let raw: RawList<RawSearchPerson> = decode(response);
    PeopleSearch {
        people: raw.items.unwrap_or_default().into_iter().map(search_person).collect(),
        paging: raw.paging,
        cursor: raw.cursor,
    }
}

fn search_person(raw: RawSearchPerson) -> SearchPerson {
    SearchPerson {
        profile_url: prefer(raw.public_profile_url.as_ref(), raw.profile_url.as_ref()),
        profile_picture_url: prefer(
            raw.profile_picture_url_large.as_ref(),
            raw.profile_picture_url.as_ref(),
        ),
        id: raw.id,
        name: raw.name,
        headline: raw.headline,
        location: raw.location,
        public_identifier: raw.public_identifier,
        network_distance: raw.network_distance,
        member_urn: raw.member_urn,
    }
}
