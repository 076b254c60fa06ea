//! Breadth-first harvesting of candidate pagination-metadata sources.
//!
//! Cursor and has-more flags may live at the payload root, inside a
//! `comments`/`data` wrapper, or inside `pagination`/`pageInfo`/`meta`.
//! Rather than guess one location, this pass collects every plausible
//! source record in traversal order and lets the caller probe them all.

use crate::refine::coerce;
use serde_json::{Map, Value};
use std::collections::{HashSet, VecDeque};

/// Keys under which further metadata-bearing records are expected.
const SOURCE_KEYS: [&str; 13] = [
    "comments",
    "data",
    "results",
    "collection",
    "records",
    "list",
    "pagination",
    "pageInfo",
    "page_info",
    "meta",
    "metadata",
    "info",
    "links",
];

/// Collect candidate metadata sources breadth-first from the root record.
///
/// Every returned value is an object. Output order is traversal order: root
/// first, shallower wrappers before deeper ones. The visited set is keyed
/// on map identity; plain JSON trees cannot cycle, but the set also bounds
/// pathological shared-reference shapes without relying on stack-overflow
/// protection.
pub fn harvest_metadata(root: &Value) -> Vec<&Value> {
    let mut sources = Vec::new();
    let mut queue: VecDeque<&Value> = VecDeque::new();
    let mut visited: HashSet<*const Map<String, Value>> = HashSet::new();

    if root.is_object() {
        queue.push_back(root);
    }

    while let Some(source) = queue.pop_front() {
        let map = match source.as_object() {
            Some(map) => map,
            None => continue,
        };
        if !visited.insert(map as *const _) {
            continue;
        }
        sources.push(source);

        for key in SOURCE_KEYS {
            if let Some(nested) = map.get(key) {
                if nested.is_object() {
                    queue.push_back(nested);
                }
            }
        }
    }

    sources
}

/// First source in traversal order whose candidate paths yield a string.
pub fn string_from_sources(sources: &[&Value], paths: &[&str]) -> Option<String> {
    sources
        .iter()
        .find_map(|source| coerce::string_at(source, paths))
}

/// First source in traversal order whose candidate paths yield a boolean.
pub fn bool_from_sources(sources: &[&Value], paths: &[&str]) -> Option<bool> {
    sources
        .iter()
        .find_map(|source| coerce::bool_at(source, paths))
}
