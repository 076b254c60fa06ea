//! Video normalization.
//!
//! Same pattern as the comment normalizer: declarative ordered alias
//! tables, defensive coercion, reject on missing identity or content.

use crate::entity::types::{Video, VideoStats};
use crate::refine::{coerce, expand, path, timestamp};
use serde_json::Value;

/// Only the canonical key and the legacy `_id` are accepted as identity.
const ID_PATHS: [&str; 2] = ["id", "_id"];

const URL_PATHS: [&str; 8] = [
    "videoUrl",
    "video_url",
    "url",
    "src",
    "playbackUrl",
    "playback_url",
    "mediaUrl",
    "media_url",
];

const TITLE_PATHS: [&str; 3] = ["title", "name", "heading"];

const DESCRIPTION_PATHS: [&str; 4] = ["description", "desc", "summary", "about"];

const PROMPT_PATHS: [&str; 3] = ["originalPrompt", "original_prompt", "prompt"];

const TAGS_PATHS: [&str; 4] = ["tags", "hashtags", "labels", "keywords"];

const HANDLE_PATHS: [&str; 10] = [
    "creatorHandle",
    "creator_handle",
    "username",
    "userName",
    "user_name",
    "handle",
    "creator.handle",
    "creator.username",
    "user.username",
    "author.username",
];

/// Accepts a plain string or anything the string coercer can stringify -
/// the `String | ConvertibleToString` union of the source contract.
const CREATED_BY_PATHS: [&str; 8] = [
    "createdBy",
    "created_by",
    "userId",
    "user_id",
    "creatorId",
    "creator_id",
    "user.id",
    "creator.id",
];

const SESSION_PATHS: [&str; 2] = ["sessionId", "session_id"];

const CREATED_AT_PATHS: [&str; 7] = [
    "createdAt",
    "created_at",
    "timestamp",
    "publishedAt",
    "published_at",
    "date",
    "created",
];

const STAT_LIKES_PATHS: [&str; 6] = [
    "stats.likes",
    "likes",
    "likeCount",
    "like_count",
    "likesCount",
    "likes_count",
];

const STAT_COMMENTS_PATHS: [&str; 6] = [
    "stats.comments",
    "comments",
    "commentCount",
    "comment_count",
    "commentsCount",
    "comments_count",
];

const STAT_SHARES_PATHS: [&str; 6] = [
    "stats.shares",
    "shares",
    "shareCount",
    "share_count",
    "sharesCount",
    "shares_count",
];

const LIKED_PATHS: [&str; 7] = [
    "viewerHasLiked",
    "viewer_has_liked",
    "hasLiked",
    "has_liked",
    "isLiked",
    "is_liked",
    "liked",
];

const BOT_PATHS: [&str; 5] = ["isBotUser", "is_bot_user", "isBot", "is_bot", "bot"];

/// Normalize one raw video item into the stable contract.
///
/// Envelope expansion is applied internally. Returns `None` when the
/// identity or playable URL cannot be recovered.
pub fn normalize_video(raw: &Value) -> Option<Video> {
    let expanded = expand::expand_entry(raw).map(Value::Object);
    let item = expanded.as_ref().unwrap_or(raw);

    let id = coerce::string_at(item, &ID_PATHS)?;
    let video_url = coerce::string_at(item, &URL_PATHS)?;

    Some(Video {
        id,
        video_url,
        title: coerce::string_at(item, &TITLE_PATHS)
            .unwrap_or_else(|| "Untitled Video".to_string()),
        description: coerce::string_at(item, &DESCRIPTION_PATHS).unwrap_or_default(),
        original_prompt: coerce::string_at(item, &PROMPT_PATHS),
        tags: tags_at(item),
        creator_handle: coerce::string_at(item, &HANDLE_PATHS),
        created_by: coerce::string_at(item, &CREATED_BY_PATHS),
        session_id: coerce::string_at(item, &SESSION_PATHS),
        // No "now" fallback here, unlike the comment normalizer; an
        // unusable timestamp stays None. See DESIGN.md.
        created_at: timestamp::timestamp_at(item, &CREATED_AT_PATHS),
        stats: VideoStats {
            likes: coerce::count_at(item, &STAT_LIKES_PATHS).unwrap_or(0),
            comments: coerce::count_at(item, &STAT_COMMENTS_PATHS).unwrap_or(0),
            shares: coerce::count_at(item, &STAT_SHARES_PATHS).unwrap_or(0),
        },
        viewer_has_liked: coerce::bool_at(item, &LIKED_PATHS).unwrap_or(false),
        is_bot_user: coerce::bool_at(item, &BOT_PATHS).unwrap_or(false),
    })
}

/// First candidate path holding an array, filtered to trimmed non-empty
/// strings. Non-string elements are discarded, not stringified.
fn tags_at(item: &Value) -> Option<Vec<String>> {
    TAGS_PATHS.iter().find_map(|p| {
        path::resolve(item, p).and_then(Value::as_array).map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_video() {
        let video =
            normalize_video(&json!({"id": "v1", "videoUrl": "https://cdn/x.mp4"})).unwrap();
        assert_eq!(video.id, "v1");
        assert_eq!(video.video_url, "https://cdn/x.mp4");
        assert_eq!(video.title, "Untitled Video");
        assert_eq!(video.description, "");
        assert_eq!(video.created_at, None);
        assert_eq!(video.stats, VideoStats::default());
        assert!(!video.viewer_has_liked);
    }

    #[test]
    fn test_legacy_id() {
        let video = normalize_video(&json!({"_id": "legacy", "url": "u"})).unwrap();
        assert_eq!(video.id, "legacy");
    }

    #[test]
    fn test_unknown_id_alias_rejected() {
        // Videos deliberately accept fewer identity aliases than comments.
        assert_eq!(
            normalize_video(&json!({"videoId": "v1", "videoUrl": "u"})),
            None
        );
    }

    #[test]
    fn test_missing_url_rejected() {
        assert_eq!(normalize_video(&json!({"id": "v1"})), None);
        assert_eq!(normalize_video(&json!({"id": "v1", "videoUrl": "  "})), None);
    }

    #[test]
    fn test_tags_filtered() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "tags": [" rust ", "", 7, null, "json"]
        }))
        .unwrap();
        assert_eq!(video.tags, Some(vec!["rust".to_string(), "json".to_string()]));
    }

    #[test]
    fn test_tags_absent_when_not_an_array() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "tags": "rust,json"
        }))
        .unwrap();
        assert_eq!(video.tags, None);
    }

    #[test]
    fn test_created_by_stringified_number() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "createdBy": 1001
        }))
        .unwrap();
        assert_eq!(video.created_by, Some("1001".to_string()));
    }

    #[test]
    fn test_unparsable_created_at_stays_none() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "createdAt": "the other day"
        }))
        .unwrap();
        assert_eq!(video.created_at, None);
    }

    #[test]
    fn test_stats_from_flat_aliases() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "likeCount": "1,200",
            "commentCount": 3.4,
            "shares": -2
        }))
        .unwrap();
        assert_eq!(video.stats.likes, 1200);
        assert_eq!(video.stats.comments, 3);
        assert_eq!(video.stats.shares, 0);
    }

    #[test]
    fn test_stats_object_preferred() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "stats": {"likes": 10},
            "likes": 99
        }))
        .unwrap();
        assert_eq!(video.stats.likes, 10);
    }

    #[test]
    fn test_viewer_has_liked_synonyms() {
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "viewer_has_liked": "yes"
        }))
        .unwrap();
        assert!(video.viewer_has_liked);
    }

    #[test]
    fn test_wrapped_item_accepted() {
        let video = normalize_video(&json!({
            "data": {"id": "v1", "video_url": "u", "title": "Wrapped"}
        }))
        .unwrap();
        assert_eq!(video.title, "Wrapped");
    }

    #[test]
    fn test_comments_array_does_not_poison_stats() {
        // "comments" is both a stat alias and a plausible sibling payload;
        // an array there must coerce to absent, not to a count.
        let video = normalize_video(&json!({
            "id": "v1",
            "videoUrl": "u",
            "comments": [{"id": "c1"}],
            "comments_count": 1
        }))
        .unwrap();
        assert_eq!(video.stats.comments, 1);
    }
}
