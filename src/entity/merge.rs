//! Identity-keyed reconciliation of entity collections.
//!
//! The caller owns an ordered collection built from previous pages; each
//! new page is folded in by `id`. Updated entities keep their original
//! position, new entities append in arrival order.

use crate::entity::types::{Comment, Video};
use std::collections::HashMap;

/// Merge behavior for an entity collection keyed by `id`.
pub trait Reconcile {
    fn entity_id(&self) -> &str;

    /// Combine an existing record with an incoming one for the same id.
    /// The incoming record is the fresher source of truth.
    fn reconcile(&self, incoming: Self) -> Self;
}

impl Reconcile for Comment {
    fn entity_id(&self) -> &str {
        &self.id
    }

    // Normalization defines every comment field, so the incoming record
    // wins wholesale.
    fn reconcile(&self, incoming: Self) -> Self {
        incoming
    }
}

impl Reconcile for Video {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn reconcile(&self, incoming: Self) -> Self {
        Video {
            // Optional fields back-fill from the existing record when the
            // incoming page did not carry them.
            original_prompt: incoming
                .original_prompt
                .or_else(|| self.original_prompt.clone()),
            tags: incoming.tags.or_else(|| self.tags.clone()),
            creator_handle: incoming
                .creator_handle
                .or_else(|| self.creator_handle.clone()),
            created_by: incoming.created_by.or_else(|| self.created_by.clone()),
            session_id: incoming.session_id.or_else(|| self.session_id.clone()),
            created_at: incoming.created_at.or_else(|| self.created_at.clone()),
            // Volatile state is taken from the incoming record
            // unconditionally, even when zero/false.
            stats: incoming.stats,
            viewer_has_liked: incoming.viewer_has_liked,
            id: incoming.id,
            video_url: incoming.video_url,
            title: incoming.title,
            description: incoming.description,
            is_bot_user: incoming.is_bot_user,
        }
    }
}

/// Fold `incoming` into `existing` by id.
///
/// An empty `existing` returns `incoming` unchanged. Otherwise known ids
/// are replaced in place with the reconciled record and new ids are
/// appended; the relative order of untouched entities is preserved.
pub fn merge_entities<T: Reconcile>(existing: Vec<T>, incoming: Vec<T>) -> Vec<T> {
    if existing.is_empty() {
        return incoming;
    }

    let mut merged = existing;
    let mut positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, e)| (e.entity_id().to_string(), i))
        .collect();

    for entity in incoming {
        match positions.get(entity.entity_id()) {
            Some(&i) => {
                let updated = merged[i].reconcile(entity);
                merged[i] = updated;
            }
            None => {
                positions.insert(entity.entity_id().to_string(), merged.len());
                merged.push(entity);
            }
        }
    }

    merged
}
