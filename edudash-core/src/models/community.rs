/// Community content: posts, comments, organizations, hashtags
///
/// These feed the moderation view, which aggregates them client-side into
/// type breakdowns, a posting trend, and a top-author ranking.
use super::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A community post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Post title; may be blank for image-only posts
    #[serde(default)]
    pub title: String,

    /// Body text
    #[serde(default)]
    pub content: String,

    /// Category ("text", "question", "showcase", …)
    #[serde(default)]
    pub post_type: Option<String>,

    /// Author reference; absent when the serializer trims it
    #[serde(default)]
    pub author: Option<UserRef>,

    /// Like total maintained by the backend
    #[serde(default)]
    pub like_count: u64,

    /// Comment total maintained by the backend
    #[serde(default)]
    pub comment_count: u64,

    /// View total maintained by the backend
    #[serde(default)]
    pub view_count: u64,

    /// When the post was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Author's username, when one is attached
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref()?.username.as_deref()
    }
}

/// A comment on a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Post the comment belongs to
    #[serde(default)]
    pub post: Option<Uuid>,

    /// Author reference
    #[serde(default)]
    pub author: Option<UserRef>,

    /// Body text
    #[serde(default)]
    pub content: String,

    /// Like total
    #[serde(default)]
    pub like_count: u64,

    /// When the comment was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A community organization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Organization name
    #[serde(default)]
    pub name: String,

    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,

    /// Kind of organization ("club", "council", …)
    #[serde(default)]
    pub org_type: Option<String>,

    /// Number of approved members
    #[serde(default)]
    pub member_count: u64,

    /// Number of posts published under the organization
    #[serde(default)]
    pub post_count: u64,

    /// Whether the organization is institution-endorsed
    #[serde(default)]
    pub is_official: bool,

    /// When the organization was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A hashtag with its usage total
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hashtag {
    /// Unique hashtag ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Tag text without the leading '#'
    #[serde(default)]
    pub tag: String,

    /// How many posts used the tag
    #[serde(default)]
    pub usage_count: u64,
}
