//! Cleaners for posts and comments

use super::decode_present;
use crate::model::{
    ActionAck, Author, Comment, CommentStats, Comments, CreatePostAck, Post, PostAttachment,
    PostStats, Posts,
};
use crate::raw::{
    RawAck, RawAttachment, RawAuthor, RawComment, RawCommentAuthorDetails, RawList, RawPost,
};
use outreach_core::json::decode;
use serde_json::Value;

/// Clean a single post; `None` for an empty response
#[must_use]
pub fn clean_post(response: &Value) -> Option<Post> {
    decode_present(response).map(post)
}

/// Clean a post listing into `{"posts": [...]}`
#[must_use]
pub fn clean_user_posts(response: &Value) -> Posts {
    let raw: RawList<Option<RawPost>> = decode(response);
    Posts {
        posts: raw
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.map(post))
            .collect(),
    }
}

fn post(raw: RawPost) -> Post {
    Post {
        id: raw.id,
        text: raw.text,
        date: raw.date,
        parsed_date_time: raw.parsed_datetime,
        share_url: raw.share_url,
        stats: PostStats {
            comments: raw.comment_counter,
            reactions: raw.reaction_counter,
            reposts: raw.repost_counter,
            impressions: raw.impressions_counter,
        },
        author: raw.author.map(author),
        attachments: raw
            .attachments
            .unwrap_or_default()
            .into_iter()
            .map(attachment)
            .collect(),
        is_repost: raw.is_repost,
    }
}

fn author(raw: RawAuthor) -> Author {
    Author {
        name: raw.name,
        headline: raw.headline,
        public_identifier: raw.public_identifier,
        is_company: raw.is_company,
    }
}

fn attachment(raw: RawAttachment) -> PostAttachment {
    let mut cleaned = PostAttachment {
        url: raw.url,
        ..PostAttachment::default()
    };

    match raw.kind.as_deref() {
        Some("file") => {
            cleaned.file_name = raw.file_name;
            cleaned.mime_type = raw.mimetype;
        }
        Some("img" | "video") => {
            let size = raw.size.unwrap_or_default();
            cleaned.width = size.width;
            cleaned.height = size.height;
        }
        _ => {}
    }

    cleaned.kind = raw.kind;
    cleaned
}

/// Clean a comment listing into `{"comments": [...]}`
///
/// Used for both a post's comments and a user's comments.
#[must_use]
pub fn clean_post_comments(response: &Value) -> Comments {
    let raw: RawList<RawComment> = decode(response);
    Comments {
        comments: raw.items.unwrap_or_default().into_iter().map(comment).collect(),
    }
}

fn comment(raw: RawComment) -> Comment {
    Comment {
        author: comment_author(raw.author, raw.author_details),
        id: raw.id,
        text: raw.text,
        date: raw.date,
        parsed_date_time: raw.parsed_datetime,
        stats: CommentStats {
            reactions: raw.reaction_counter.unwrap_or(0),
        },
    }
}

/// A comment's author is either a full object or a bare name with the rest in
/// `author_details`
fn comment_author(
    author_field: Option<Value>,
    details: Option<RawCommentAuthorDetails>,
) -> Option<Author> {
    match author_field? {
        Value::Object(map) => Some(author(decode(&Value::Object(map)))),
        Value::String(name) if !name.is_empty() => {
            let details = details.unwrap_or_default();
            Some(Author {
                name: Some(name),
                headline: details.headline,
                public_identifier: details.public_identifier,
                is_company: details.is_company,
            })
        }
        _ => None,
    }
}

/// Clean the acknowledgement of `POST /posts`
#[must_use]
pub fn clean_create_post_response(response: &Value) -> Option<CreatePostAck> {
    decode_present(response).map(|raw: RawAck| CreatePostAck {
        success: true,
        post_id: raw.post_id,
        object: raw.object,
    })
}

/// Clean the acknowledgement of `POST /posts/{id}/comments`
#[must_use]
pub fn clean_comment_on_post_response(response: &Value) -> Option<ActionAck> {
    decode_present(response).map(|raw: RawAck| ActionAck {
        success: true,
        object: raw.object,
    })
}
