//! Profiles, search, connections and invitations

use crate::cleaners::{
    clean_account_owner_profile, clean_invitations_received, clean_invitations_sent,
    clean_people_search, clean_send_invitation_response, clean_user_profile, clean_user_relations,
};
use crate::client::{CallOptions, Page, UnipileClient, require};
use crate::error::UnipileError;
use crate::model::{
    AccountOwnerProfile, InvitationsReceived, InvitationsSent, PeopleSearch, Relations,
    SendInvitationAck, UserProfile,
};
use outreach_core::Payload;
use serde::{Deserialize, Serialize};

/// Results per search when the caller sets no limit
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Which LinkedIn product a search runs against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchApi {
    /// Regular LinkedIn search
    #[default]
    Classic,
    /// LinkedIn Recruiter
    Recruiter,
    /// Sales Navigator
    SalesNavigator,
}

/// What a search looks for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    /// Members
    #[default]
    People,
    /// Company pages
    Companies,
    /// Job offers
    Jobs,
    /// Groups
    Groups,
    /// Schools
    Schools,
    /// Posts
    Content,
}

/// Parameters of [`UnipileClient::search_linkedin`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Free-text keywords (required)
    pub keywords: String,
    /// Product to search with
    pub api: SearchApi,
    /// Kind of result
    pub category: SearchCategory,
    /// Maximum number of results, [`DEFAULT_SEARCH_LIMIT`] when unset
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Classic people search for `keywords`
    #[must_use]
    pub fn people(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            ..Self::default()
        }
    }

    /// Builder: Cap the number of results
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Serialize)]
pub(crate) struct SearchBody<'a> {
    pub api: SearchApi,
    pub category: SearchCategory,
    pub keywords: &'a str,
    pub account_id: &'a str,
    pub limit: u32,
}

#[derive(Serialize)]
struct InvitationBody<'a> {
    account_id: &'a str,
    recipient: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// `limit` unless unset or zero
pub(crate) fn search_limit(limit: Option<u32>) -> u32 {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_SEARCH_LIMIT)
}

impl UnipileClient {
    /// Profile of the account the client acts as
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::MissingAccountId` when no account is configured,
    /// `Api` for non-success responses, and `RequestFailed`/`ResponseParseFailed`
    /// for transport or decoding failures
    pub async fn get_account_owner_profile(
        &self,
        options: &CallOptions,
    ) -> Result<Payload<Option<AccountOwnerProfile>>, UnipileError> {
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", "me"], account_id, None)?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_account_owner_profile))
    }

    /// Profile of any user, by public identifier or provider id
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank identifier, otherwise the
    /// same errors as [`Self::get_account_owner_profile`]
    pub async fn get_user_profile(
        &self,
        identifier: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<UserProfile>>, UnipileError> {
        let identifier = require(identifier, "User identifier")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", identifier], account_id, None)?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_user_profile))
    }

    /// Search LinkedIn; the cleaned shape is the people search
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` when `keywords` is blank, otherwise
    /// the same errors as [`Self::get_account_owner_profile`]
    pub async fn search_linkedin(
        &self,
        params: &SearchParams,
        options: &CallOptions,
    ) -> Result<Payload<PeopleSearch>, UnipileError> {
        let keywords = params.keywords.trim();
        if keywords.is_empty() {
            return Err(UnipileError::InvalidArgument("Search keywords are required".to_string()));
        }
        let account_id = self.account_id(options)?;

        let body = SearchBody {
            api: params.api,
            category: params.category,
            keywords,
            account_id,
            limit: search_limit(params.limit),
        };
        let url = self.scoped_url(&["linkedin", "search"], account_id, None)?;
        let response = self.post_json(url, &body).await?;

        Ok(Payload::from_body(response, options.raw, clean_people_search))
    }

    /// First-degree connections of the account
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_account_owner_profile`]
    pub async fn get_relations(
        &self,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<Relations>, UnipileError> {
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", "relations"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_user_relations))
    }

    /// Pending invitations the account sent
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_account_owner_profile`]
    pub async fn get_invitations_sent(
        &self,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<InvitationsSent>, UnipileError> {
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", "invite", "sent"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_invitations_sent))
    }

    /// Pending invitations the account received
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_account_owner_profile`]
    pub async fn get_invitations_received(
        &self,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<InvitationsReceived>, UnipileError> {
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", "invite", "received"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_invitations_received))
    }

    /// Send a connection request, optionally with a note
    ///
    /// Not idempotent: every call sends a new invitation.
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank recipient, otherwise the
    /// same errors as [`Self::get_account_owner_profile`]
    pub async fn send_invitation(
        &self,
        recipient: &str,
        message: Option<&str>,
        options: &CallOptions,
    ) -> Result<Payload<Option<SendInvitationAck>>, UnipileError> {
        let recipient = require(recipient, "Recipient")?;
        let account_id = self.account_id(options)?;

        let body = InvitationBody {
            account_id,
            recipient,
            message: message.filter(|m| !m.is_empty()),
        };
        let url = self.url(&["users", "invite"])?;
        let response = self.post_json(url, &body).await?;

        Ok(Payload::from_body(response, options.raw, clean_send_invitation_response))
    }
}
