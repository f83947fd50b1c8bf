//! Snapshot persistence for the message collection.
//!
//! The whole collection is stored as one JSON document under a fixed key,
//! read once at startup and rewritten after every change.

mod repository;
mod snapshot;

pub use repository::{SnapshotRepository, StoredSnapshot};
pub use snapshot::{MESSAGES_KEY, decode, encode};
