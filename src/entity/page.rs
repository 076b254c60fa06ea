//! Pagination assembly: locate raw items, normalize them, and resolve
//! cursor state from whichever corner of the payload it landed in.

use crate::entity::comment::normalize_comment;
use crate::entity::types::{Comment, Page, Video};
use crate::entity::video::normalize_video;
use crate::refine::{discover, harvest};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Ordered cursor aliases, probed against every harvested metadata source.
const CURSOR_PATHS: [&str; 18] = [
    "nextCursor",
    "next_cursor",
    "next.cursor",
    "cursor",
    "nextToken",
    "next_token",
    "nextPageToken",
    "next_page_token",
    "pagination.nextCursor",
    "pagination.next_cursor",
    "pagination.cursor",
    "pagination.next",
    "pagination.nextToken",
    "pageInfo.endCursor",
    "page_info.end_cursor",
    "meta.nextCursor",
    "meta.cursor",
    "links.next",
];

const HAS_MORE_PATHS: [&str; 13] = [
    "hasMore",
    "has_more",
    "hasNextPage",
    "has_next_page",
    "hasNext",
    "has_next",
    "more",
    "pagination.hasMore",
    "pagination.has_more",
    "pageInfo.hasNextPage",
    "page_info.has_next_page",
    "meta.hasMore",
    "meta.has_more",
];

/// An entity that can be assembled into a `Page`.
///
/// `normalize` is the full tolerant path; `is_normal` is the light check
/// used by the fast path when a payload already carries the target shape.
pub trait PageItem: Sized + DeserializeOwned {
    fn normalize(raw: &Value) -> Option<Self>;
    fn is_normal(&self) -> bool;
}

impl PageItem for Comment {
    fn normalize(raw: &Value) -> Option<Self> {
        normalize_comment(raw)
    }

    fn is_normal(&self) -> bool {
        !self.id.is_empty()
            && !self.text.is_empty()
            && self.text == self.text.trim()
            && !(self.text.contains('<') && self.text.contains('>'))
            && !self.created_at.is_empty()
    }
}

impl PageItem for Video {
    fn normalize(raw: &Value) -> Option<Self> {
        normalize_video(raw)
    }

    fn is_normal(&self) -> bool {
        !self.id.is_empty()
            && !self.video_url.is_empty()
            && self.video_url == self.video_url.trim()
    }
}

/// Assemble a page of comments from an arbitrary payload shape.
pub fn parse_comments_page(payload: &Value) -> Page<Comment> {
    parse_page(payload)
}

/// Assemble a page of videos from an arbitrary payload shape.
pub fn parse_videos_page(payload: &Value) -> Page<Video> {
    parse_page(payload)
}

/// Generic page assembly over any `PageItem`.
///
/// `has_more` honors an explicit flag from any harvested source first and
/// otherwise defaults to "a cursor was found".
pub fn parse_page<T: PageItem>(payload: &Value) -> Page<T> {
    let sources = harvest::harvest_metadata(payload);
    let next_cursor = harvest::string_from_sources(&sources, &CURSOR_PATHS);
    let explicit_more = harvest::bool_from_sources(&sources, &HAS_MORE_PATHS);
    let has_more = explicit_more.unwrap_or(next_cursor.is_some());

    // Fast path: the payload is already {items: [...]} with every item in
    // target shape. Skip discovery and expansion, keep the items as-is.
    if let Some(items) = ready_items(payload) {
        return Page {
            items,
            next_cursor,
            has_more,
        };
    }

    let raw_items = discover::discover_collection(payload);
    // Nothing discoverable: fall back to treating the payload itself as a
    // single candidate item.
    let raw_items = if raw_items.is_empty() && payload.is_object() {
        vec![payload.clone()]
    } else {
        raw_items
    };

    let raw_count = raw_items.len();
    let items: Vec<T> = raw_items.iter().filter_map(T::normalize).collect();

    if items.is_empty() && raw_count > 0 {
        debug!("page yielded no entities from {raw_count} raw item(s)");
    }

    Page {
        items,
        next_cursor,
        has_more,
    }
}

/// Accept the payload's own `items` only when every element deserializes
/// into the target record and passes light validation. Any miss falls back
/// to the full tolerant path.
fn ready_items<T: PageItem>(payload: &Value) -> Option<Vec<T>> {
    let items = payload.as_object()?.get("items")?.as_array()?;

    items
        .iter()
        .map(|raw| serde_json::from_value::<T>(raw.clone()).ok().filter(T::is_normal))
        .collect()
}
