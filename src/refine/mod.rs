//! Shape-probing primitives over untrusted JSON.
//!
//! Everything in this module is a pure, total function over
//! `serde_json::Value`: resolution and coercion failures propagate as
//! `None`/empty results, never as errors or panics. Termination on
//! adversarial input is guaranteed structurally - an explicit depth bound
//! in collection discovery and an identity-keyed visited set in metadata
//! harvesting.

pub mod coerce;
pub mod discover;
pub mod expand;
pub mod harvest;
pub mod path;
pub mod timestamp;

pub use coerce::{bool_at, count_at, first_match, number_at, string_at};
pub use discover::discover_collection;
pub use expand::expand_entry;
pub use harvest::{bool_from_sources, harvest_metadata, string_from_sources};
pub use timestamp::{now_iso8601, timestamp_at, to_iso8601};
