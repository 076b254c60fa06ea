use serde::{Deserialize, Serialize};

/// A normalized comment. Serialized form matches the wire contract the
/// rest of the application consumes (camelCase keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Trimmed, tag-stripped, guaranteed non-empty.
    pub text: String,
    pub creator_handle: String,
    pub created_by: String,
    /// ISO-8601 UTC string.
    pub created_at: String,
    pub likes: u64,
    pub is_bot_user: bool,
}

/// A normalized video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    /// Guaranteed non-empty after trim.
    pub video_url: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_handle: Option<String>,
    pub created_by: Option<String>,
    pub session_id: Option<String>,
    /// ISO-8601 UTC string, or `None` when the source value was absent or
    /// unparsable.
    pub created_at: Option<String>,
    pub stats: VideoStats,
    pub viewer_has_liked: bool,
    pub is_bot_user: bool,
}

/// Engagement counters, always rounded to non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoStats {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// One page of normalized entities plus the pagination state needed to
/// fetch the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Opaque upstream token, passed back verbatim on the next fetch.
    pub next_cursor: Option<String>,
    pub has_more: bool,
}
