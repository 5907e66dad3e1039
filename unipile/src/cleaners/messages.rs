//! Cleaners for chats and messages

use super::{decode_present, full_name, prefer};
use crate::model::{
    Chat, ChatAttendee, ChatMessages, Chats, CreateChatAck, LastMessage, Message, SendMessageAck,
};
use crate::raw::{RawAck, RawAttendee, RawChat, RawList, RawMessage};
use outreach_core::json::decode;
use serde_json::Value;

/// Clean `GET /chats` into `{"chats": [...]}`
#[must_use]
pub fn clean_chats(response: &Value) -> Chats {
    let raw: RawList<RawChat> = decode(response);
    Chats {
        chats: raw.items.unwrap_or_default().into_iter().map(chat).collect(),
    }
}

fn chat(raw: RawChat) -> Chat {
    Chat {
        id: raw.id,
        name: raw.name,
        last_activity: raw.timestamp,
        unread_count: raw.unread_count,
        attendee_provider_id: raw.attendee_provider_id,
        provider_id: raw.provider_id,
        attendees: raw
            .attendees
            .unwrap_or_default()
            .into_iter()
            .map(attendee)
            .collect(),
        last_message: raw.last_message.map(|last| LastMessage {
            text: last.text,
            timestamp: last.timestamp,
            sender_id: last.sender_id,
        }),
    }
}

fn attendee(raw: RawAttendee) -> ChatAttendee {
    ChatAttendee {
        name: full_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
        id: raw.id,
        profile_picture_url: raw.profile_picture_url,
    }
}

/// Clean `GET /chats/{id}/messages` into `{"messages": [...], "cursor": ...}`
#[must_use]
pub fn clean_chat_messages(response: &Value) -> ChatMessages {
    let raw: RawList<Option<RawMessage>> = decode(response);
    ChatMessages {
        messages: raw
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.map(message))
            .collect(),
        cursor: raw.cursor,
    }
}

fn message(raw: RawMessage) -> Message {
    Message {
        id: raw.id,
        text: raw.text,
        timestamp: raw.timestamp,
        is_sender: raw.is_sender,
        sender_id: raw.sender_id,
        sender_attendee_id: raw.sender_attendee_id,
        chat_id: raw.chat_id,
        chat_provider_id: raw.chat_provider_id,
        seen: raw.seen,
        delivered: raw.delivered,
        edited: raw.edited,
        deleted: raw.deleted,
        attachments: raw.attachments.unwrap_or_default(),
    }
}

/// Clean the acknowledgement of `POST /chats`
#[must_use]
pub fn clean_create_chat_response(response: &Value) -> Option<CreateChatAck> {
    decode_present(response).map(|raw: RawAck| CreateChatAck {
        success: true,
        object: raw.object,
        chat_id: raw.chat_id,
        message_id: raw.message_id,
    })
}

/// Clean the acknowledgement of `POST /chats/{id}/messages`
#[must_use]
pub fn clean_send_message_response(response: &Value) -> Option<SendMessageAck> {
    decode_present(response).map(|raw: RawAck| SendMessageAck {
        success: true,
        message_id: prefer(raw.message_id.as_ref(), raw.id.as_ref()),
        object: raw.object,
    })
}
