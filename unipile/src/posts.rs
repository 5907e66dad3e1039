//! Posts and comments

use crate::cleaners::{
    clean_comment_on_post_response, clean_create_post_response, clean_post, clean_post_comments,
    clean_user_posts,
};
use crate::client::{CallOptions, Page, UnipileClient, require};
use crate::error::UnipileError;
use crate::model::{ActionAck, Comments, CreatePostAck, Post, Posts};
use outreach_core::Payload;
use serde::{Deserialize, Serialize};

/// Audience of a new post
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// First-degree connections only
    #[default]
    Connections,
    /// Anyone
    Public,
}

#[derive(Serialize)]
struct CreatePostBody<'a> {
    account_id: &'a str,
    content: &'a str,
    visibility: Visibility,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    account_id: &'a str,
    content: &'a str,
}

impl UnipileClient {
    /// Posts written by a user
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank user id,
    /// `MissingAccountId` when no account is configured, `Api` for non-success
    /// responses, and `RequestFailed`/`ResponseParseFailed` otherwise
    pub async fn get_user_posts(
        &self,
        user_id: &str,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<Posts>, UnipileError> {
        let user_id = require(user_id, "User ID")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", user_id, "posts"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_user_posts))
    }

    /// Comments written by a user
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_user_posts`]
    pub async fn get_user_comments(
        &self,
        user_id: &str,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<Comments>, UnipileError> {
        let user_id = require(user_id, "User ID")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["users", user_id, "comments"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_post_comments))
    }

    /// Publish a post as the account
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for blank content, otherwise the same
    /// errors as [`Self::get_user_posts`]
    pub async fn create_post(
        &self,
        content: &str,
        visibility: Visibility,
        options: &CallOptions,
    ) -> Result<Payload<Option<CreatePostAck>>, UnipileError> {
        if content.trim().is_empty() {
            return Err(UnipileError::InvalidArgument("Post content is required".to_string()));
        }
        let account_id = self.account_id(options)?;

        let body = CreatePostBody {
            account_id,
            content,
            visibility,
        };
        let url = self.url(&["posts"])?;
        let response = self.post_json(url, &body).await?;

        Ok(Payload::from_body(response, options.raw, clean_create_post_response))
    }

    /// A single post
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank post id, otherwise the
    /// same errors as [`Self::get_user_posts`]
    pub async fn get_post(
        &self,
        post_id: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<Post>>, UnipileError> {
        let post_id = require(post_id, "Post ID")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["posts", post_id], account_id, None)?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_post))
    }

    /// Comments on a post
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_post`]
    pub async fn get_post_comments(
        &self,
        post_id: &str,
        page: &Page,
        options: &CallOptions,
    ) -> Result<Payload<Comments>, UnipileError> {
        let post_id = require(post_id, "Post ID")?;
        let account_id = self.account_id(options)?;
        let url = self.scoped_url(&["posts", post_id, "comments"], account_id, Some(page))?;
        let response = self.get_json(url).await?;

        Ok(Payload::from_body(response, options.raw, clean_post_comments))
    }

    /// Comment on a post as the account
    ///
    /// # Errors
    ///
    /// Returns `UnipileError::InvalidArgument` for a blank post id or content,
    /// otherwise the same errors as [`Self::get_user_posts`]
    pub async fn comment_on_post(
        &self,
        post_id: &str,
        content: &str,
        options: &CallOptions,
    ) -> Result<Payload<Option<ActionAck>>, UnipileError> {
        let post_id = require(post_id, "Post ID")?;
        if content.trim().is_empty() {
            return Err(UnipileError::InvalidArgument("Comment content is required".to_string()));
        }
        let account_id = self.account_id(options)?;

        let url = self.url(&["posts", post_id, "comments"])?;
        let response = self.post_json(url, &CommentBody { account_id, content }).await?;

        Ok(Payload::from_body(response, options.raw, clean_comment_on_post_response))
    }
}
