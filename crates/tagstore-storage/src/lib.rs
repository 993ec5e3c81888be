//! Record storage and persistence for Tagstore.
//!
//! [`InMemoryStore`] is the append-only record collection used by the query
//! service. [`JsonFileSnapshot`] persists its contents to a single JSON file.

pub mod json;
pub mod memory;

pub use json::JsonFileSnapshot;
pub use memory::InMemoryStore;
pub use tagstore_core::{DuplicatePolicy, RecordStore, SnapshotStore};
