//! Comment normalization.
//!
//! The alias tables below are data, not behavior: each logical field lists
//! every location it has been observed at across known schema variants, in
//! priority order. Extending support for a new upstream shape usually means
//! adding a path here, not writing code.

use crate::entity::types::Comment;
use crate::refine::{coerce, expand, timestamp};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

const ID_PATHS: [&str; 8] = [
    "id",
    "_id",
    "commentId",
    "comment_id",
    "uuid",
    "guid",
    "pk",
    "key",
];

const TEXT_PATHS: [&str; 5] = ["text", "body", "content", "message", "caption"];

const HANDLE_PATHS: [&str; 14] = [
    "creatorHandle",
    "creator_handle",
    "username",
    "userName",
    "user_name",
    "handle",
    "authorName",
    "author_name",
    "author",
    "user.username",
    "user.handle",
    "author.username",
    "author.handle",
    "user.name",
];

const CREATED_BY_PATHS: [&str; 10] = [
    "createdBy",
    "created_by",
    "userId",
    "user_id",
    "authorId",
    "author_id",
    "user.id",
    "author.id",
    "ownerId",
    "owner_id",
];

const CREATED_AT_PATHS: [&str; 9] = [
    "createdAt",
    "created_at",
    "timestamp",
    "time",
    "date",
    "created",
    "publishedAt",
    "published_at",
    "postedAt",
];

const LIKES_PATHS: [&str; 10] = [
    "likes",
    "likeCount",
    "like_count",
    "likesCount",
    "likes_count",
    "favoriteCount",
    "favorite_count",
    "upvotes",
    "stats.likes",
    "counts.likes",
];

const BOT_PATHS: [&str; 7] = [
    "isBotUser",
    "is_bot_user",
    "isBot",
    "is_bot",
    "bot",
    "author.isBot",
    "user.is_bot",
];

/// Normalize one raw comment item into the stable contract.
///
/// Envelope expansion is applied internally, so wrapped items
/// (`{"node": {...}}` and friends) are accepted directly. Returns `None`
/// when the identity or content field cannot be recovered - a comment is
/// dropped rather than emitted with placeholder content.
pub fn normalize_comment(raw: &Value) -> Option<Comment> {
    let expanded = expand::expand_entry(raw).map(Value::Object);
    let item = expanded.as_ref().unwrap_or(raw);

    let id = coerce::string_at(item, &ID_PATHS)?;
    let text = clean_text(&coerce::string_at(item, &TEXT_PATHS)?)?;

    Some(Comment {
        id,
        text,
        creator_handle: coerce::string_at(item, &HANDLE_PATHS)
            .unwrap_or_else(|| "User".to_string()),
        created_by: coerce::string_at(item, &CREATED_BY_PATHS).unwrap_or_default(),
        // Unparsable timestamps fall back to "now". The Video normalizer
        // keeps `None` for the same situation; see DESIGN.md before
        // aligning either side.
        created_at: timestamp::timestamp_at(item, &CREATED_AT_PATHS)
            .unwrap_or_else(timestamp::now_iso8601),
        likes: coerce::count_at(item, &LIKES_PATHS).unwrap_or(0),
        is_bot_user: coerce::bool_at(item, &BOT_PATHS).unwrap_or(false),
    })
}

/// Best-effort HTML stripping, not a parser: when the trimmed text contains
/// both `<` and `>`, every tag-like `<...>` run is removed and the result
/// re-trimmed. Empty output rejects the comment.
fn clean_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let cleaned = if trimmed.contains('<') && trimmed.contains('>') {
        TAG_REGEX.replace_all(trimmed, "").trim().to_string()
    } else {
        trimmed.to_string()
    };

    (!cleaned.is_empty()).then_some(cleaned)
}
