//! Core types and traits for the Tagstore record service.
//!
//! This crate provides the record model and the seams shared by the
//! storage, cache, search and gateway crates.

pub mod error;
pub mod query;
pub mod record;
pub mod snapshot;
pub mod stats;
pub mod store;

pub use error::{SnapshotError, StoreError};
pub use query::TagQuery;
pub use record::{Record, RecordId};
pub use snapshot::{Snapshot, SnapshotStore};
pub use stats::CacheStats;
pub use store::{DuplicatePolicy, RecordStore};
