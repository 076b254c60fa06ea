//! # Crucible - Tolerant JSON Normalization
//!
//! A library for converting heterogeneous JSON payloads from an upstream
//! content API into a small, stable entity contract (comments, videos,
//! pagination state) the rest of an application can rely on
//! unconditionally.
//!
//! The upstream response shape is not contractually stable: field names
//! vary between camelCase and snake_case, entities hide under envelope
//! keys (`node`, `data`, GraphQL edges), pagination metadata moves around,
//! and numbers or booleans sometimes arrive as strings. Crucible answers
//! with bounded recursive search, ordered-candidate field resolution, and
//! defensive type coercion - best-effort, deterministic extraction that
//! never panics and never hangs.
//!
//! ## Modules
//!
//! - **refine**: shape-probing primitives (path resolution, coercion,
//!   envelope expansion, collection discovery, metadata harvesting)
//! - **entity**: the entity contract, normalizers, pagination assembly,
//!   and identity-keyed merge
//!
//! ## Quick Start
//!
//! ```rust
//! use crucible::{normalize_comment, parse_comments_page};
//! use serde_json::json;
//!
//! let comment = normalize_comment(&json!({
//!     "node": {"comment_id": "c1", "body": "  <b>Hello</b>  ", "like_count": "1,234"}
//! })).unwrap();
//! assert_eq!(comment.text, "Hello");
//! assert_eq!(comment.likes, 1234);
//!
//! let page = parse_comments_page(&json!({
//!     "data": {
//!         "edges": [{"node": {"id": "c2", "text": "hi"}}],
//!         "pageInfo": {"endCursor": "abc", "hasNextPage": true}
//!     }
//! }));
//! assert_eq!(page.items.len(), 1);
//! assert_eq!(page.next_cursor.as_deref(), Some("abc"));
//! assert!(page.has_more);
//! ```

use serde_json::Value;
use std::io::{BufRead, Write};
use thiserror::Error;

pub mod entity;
pub mod refine;

// Re-export the library boundary for convenience
pub use entity::{
    merge_entities, normalize_comment, normalize_video, parse_comments_page, parse_page,
    parse_videos_page, Comment, Page, PageItem, Reconcile, Video, VideoStats,
};

/// Which entity the stream driver should normalize payloads into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Comments,
    Videos,
}

/// Errors from the stream driver. The engine itself is infallible; only
/// reading and decoding the input stream can fail.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("failed to decode JSON payload")]
    Json(#[from] serde_json::Error),
}

/// Main entry point for streams: normalize newline-delimited JSON payloads
/// into one serialized `Page` per line.
pub fn refine_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    kind: EntityKind,
) -> Result<(), RefineError> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let payload: Value = serde_json::from_str(&line)?;
        let serialized = match kind {
            EntityKind::Comments => serde_json::to_string(&parse_comments_page(&payload))?,
            EntityKind::Videos => serde_json::to_string(&parse_videos_page(&payload))?,
        };
        writeln!(writer, "{serialized}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_round_trip() {
        let input = concat!(
            r#"{"comments": {"items": [{"id": "1", "text": "hi"}], "pagination": {"hasMore": true}}}"#,
            "\n",
            "\n",
            r#"{"items": []}"#,
            "\n",
        );

        let mut output = Vec::new();
        refine_stream(input.as_bytes(), &mut output, EntityKind::Comments).unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["items"][0]["id"], json!("1"));
        assert_eq!(first["hasMore"], json!(true));

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["items"], json!([]));
        assert_eq!(second["hasMore"], json!(false));
    }

    #[test]
    fn test_stream_rejects_malformed_line() {
        let mut output = Vec::new();
        let result = refine_stream(
            "not json at all\n".as_bytes(),
            &mut output,
            EntityKind::Videos,
        );
        assert!(matches!(result, Err(RefineError::Json(_))));
    }
}
