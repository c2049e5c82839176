//! Data models for the feed core.
//!
//! The wire shape (camelCase field names) matches the JSON the display
//! surfaces consume, so serialized snapshots need no adapter layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account rendered next to posts and comments. Immutable once created and
/// shared by clone; there is no profile editing in this demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    pub kind: MediaKind,
    /// Media URL for image/video posts, raw text for text posts
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Structured media shared inside a comment (a saved meme sent as a reply).
///
/// Kept as data rather than markup embedded in `text`, so renderers never
/// have to interpret comment text as anything but text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: User,
    /// Free text, stored verbatim. Renderers must escape it.
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Displayed only; no increment path exists for comment likes.
    pub like_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<MediaAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: User,
    pub content: PostContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub like_count: u32,
    /// Append-only, insertion-ordered
    pub comments: Vec<Comment>,
    /// Stored without the leading `#`
    pub tags: Vec<String>,
}

/// Caller-supplied comment fields; id, timestamp and like count are assigned
/// by the store when the comment is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub author: User,
    pub text: String,
    pub attachment: Option<MediaAttachment>,
}

impl CommentDraft {
    pub fn text(author: User, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            attachment: None,
        }
    }

    pub fn attachment(author: User, attachment: MediaAttachment) -> Self {
        Self {
            author,
            text: String::new(),
            attachment: Some(attachment),
        }
    }
}

/// Composer input for the publish workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub caption: String,
    /// Whitespace-delimited; only `#`-prefixed tokens become tags
    pub tags: String,
    /// Selected image URL; a placeholder is substituted when absent
    pub image: Option<String>,
}

/// Observable feed state handed to rendering surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub load_error: Option<String>,
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            is_loading: true,
            load_error: None,
        }
    }
}
