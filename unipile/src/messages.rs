//! Chats, messages and `InMail`

use crate::cleaners::{
    clean_action_response, clean_chat_messages, clean_chats, clean_create_chat_response,
    clean_send_message_response,
};
use crate::client::{CallOptions, Page, UnipileClient, require};
use crate::error::UnipileError;
use crate::model::{ActionAck, ChatMessages, Chats, CreateChatAck, SendMessageAck};
use outreach_core::Payload;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Format of an outgoing message body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text
    #[default]
    Text,
    /// HTML
    Html,
}

/// A file attached to an outgoing message
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageAttachment {
    /// Attachment kind, e.g. `img` or `file`
    #[serde(rename = "type")]
    pub kind: String,
    /// Where the file can be fetched
    pub url: String,
    /// File name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Any other field the API accepts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options of [`UnipileClient::send_message`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SendMessageOptions {
    /// Body format, text by default
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Files to attach
    pub attachments: Vec<MessageAttachment>,
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    account_id: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    kind: MessageType,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    attachments: &'a [MessageAttachment],
}

#[derive(Serialize)]
struct CreateChatBody<'a> {
    account_id: &'a str,
    attendee_id: &'a str,
}

#[derive(Serialize)]
struct InMailBody<'a> {
    account_id: &'a str,
    recipient_id: &'a str,
    subject: &'a str,
    content: &'a str,
}

fn require_text(value: &str, message: &str) -> Result<(), UnipileError> {
    if value.trim().is_empty() {
        Err(UnipileError::InvalidArgument(message.to_string()))
    } else {
        Ok(())
    }
}

impl UnipileClient {
    /// Conversations of the account
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::MissingAccountId` when no account is configured,
    /// `Api` for non-success responses, and `RequestFailed`/`ResponseParseFailed`
    /// for transport or decoding failures
    pub async fn get_chats(
        &self,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<Chats>, UnipileError> {
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["chats"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_chats))
    }

    /// Messages of one conversation, newest first
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank chat id, otherwise the
    /// same errors as [`Self::get_chats`]
    pub async fn get_chat_messages(
        &self,
        chat_id: &str,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<ChatMessages>, UnipileError> {
        let chat_id = require(chat_id, "Chat ID")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["chats", chat_id, "messages"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_chat_messages))
    }

    /// Send a message in an existing conversation
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank chat id or content,
    /// otherwise the same errors as [`Self::get_chats`]
    pub async fn send_message(
        &self,
        chat_id: &str,
        content: &str,
        message: &SendMessageOptions,
        options: &CallOptions,
    ) -> Result<Payload<Option<SendMessageAck>>, UnipileError> {
        let chat_id = require(chat_id, "Chat ID")?;
        require_text(content, "Message content is required")?;
        let account_id = self.account_id(options)?;

        let body = SendMessageBody {
            account_id,
            content,
            kind: message.kind,
            attachments: &message.attachments,
        };
        let url = self.url(&["chats", chat_id, "messages"])?;
        let response = self.post_json(url, &body).await?;

        Ok(Payload::from_body(response, options.raw, clean_send_message_response))
    }

    /// Start a conversation with a user, by provider id
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank recipient, otherwise the
    /// same errors as [`Self::get_chats`]
    pub async fn create_chat(
        &self,
        recipient_id: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<CreateChatAck>>, UnipileError> {
        let attendee_id = require(recipient_id, "Recipient ID")?;
        let account_id = self.account_id(options)?;

        let url = self.url(&["chats"])?;
        let response = self
            .post_json(url, &CreateChatBody { account_id, attendee_id })
            .await?;

        Ok(Payload::from_body(response, options.raw, clean_create_chat_response))
    }

    /// Send an `InMail` to a user outside the account's network
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank recipient, subject or
    /// content, otherwise the same errors as [`Self::get_chats`]
    pub async fn send_inmail(
        &self,
        recipient_id: &str,
        subject: &str,
        content: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<ActionAck>>, UnipileError> {
        let recipient_id = require(recipient_id, "Recipient ID")?;
        require_text(subject, "InMail subject is required")?;
        require_text(content, "InMail content is required")?;
        let account_id = self.account_id(options)?;

        let body = InMailBody {
            account_id,
            recipient_id,
            subject,
            content,
        };
        let url = self.url(&["linkedin", "inmail"])?;
        let response = self.post_json(url, &body).await?;

        Ok(Payload::from_body(response, options.raw, clean_action_response))
    }
}
