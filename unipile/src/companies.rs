//! Company pages: profile, search, follow

use crate::cleaners::{clean_action_response, clean_company_profile, clean_company_search_results};
use crate::client::{CallOptions, UnipileClient, require};
use crate::error::UnipileError;
use crate::model::{ActionAck, CompanyProfile, CompanySearch};
use crate::users::{SearchApi, SearchBody, SearchCategory, search_limit};
use outreach_core::Payload;
use serde::Serialize;

#[derive(Serialize)]
struct AccountBody<'a> {
    account_id: &'a str,
}

impl UnipileClient {
    /// A company page, by public identifier or numeric id
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank identifier,
    /// `MissingAccountId` when no account is configured, `Api` for non-success
    /// responses, and `RequestFailed`/`ResponseParseFailed` otherwise
    pub async fn get_company_profile(
        &self,
        identifier: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<CompanyProfile>>, UnipileError> {
        let identifier = require(identifier, "Company identifier")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["linkedin", "company", identifier], account_id, None)?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_company_profile))
    }

    /// Classic company search
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` when `keywords` is blank, otherwise
    /// the same errors as [`Self::get_company_profile`]
    pub async fn search_companies(
        &self,
        keywords: &str,
        limit: Option<u32>,
        options: &CallOptions,
    ) -> Result<Payload<CompanySearch>, UnipileError> {
        let keywords = keywords.trim();
        if keywords.is_empty() {
            return Err(UnipileError::InvalidArgument("Search keywords are required".to_string()));
        }
        let account_id = self.account_id(options)?;

        let body = SearchBody {
            api: SearchApi::Classic,
            category: SearchCategory::Companies,
            keywords,
            account_id,
            limit: search_limit(limit),
        };
        let url = self.scoped_url(&["linkedin", "search"], account_id, None)?;
        let response = self.post_json(url, &body).await?;

        Ok(Payload::from_body(response, options.raw, clean_company_search_results))
    }

    /// Follow a company page as the account
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank company id, otherwise the
    /// same errors as [`Self::get_company_profile`]
    pub async fn follow_company(
        &self,
        company_id: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<ActionAck>>, UnipileError> {
        self.company_action(company_id, "follow", options).await
    }

    /// Stop following a company page
    ///
    /// # Errors
    ///
    /// Same as [`Self::follow_company`]
    pub async fn unfollow_company(
        &self,
        company_id: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<ActionAck>>, UnipileError> {
        self.company_action(company_id, "unfollow", options).await
    }

    async fn company_action(
        &self,
        company_id: &str,
        action: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<ActionAck>>, UnipileError> {
        let company_id = require(company_id, "Company ID")?;
        let account_id = self.account_id(options)?;

        let url = self.url(&["linkedin", "company", company_id, action])?;
        let response = self.post_json(url, &AccountBody { account_id }).await?;

        Ok(Payload::from_body(response, options.raw, clean_action_response))
    }
}
