use crate::error::StoreError;
use crate::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// How a store treats a record whose id is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// No uniqueness check; duplicate ids are stored side by side.
    #[default]
    Allow,
    /// Reject the record with [`StoreError::DuplicateId`].
    Reject,
}

/// An append-only, insertion-ordered collection of records.
///
/// Stores are plain data holders. They do not know about caches; keeping
/// derived state coherent after a mutation is the caller's job.
pub trait RecordStore: Send + 'static {
    /// Appends a record.
    ///
    /// Only fails when the store enforces [`DuplicatePolicy::Reject`].
    fn add(&mut self, record: Record) -> Result<(), StoreError>;

    /// All records in insertion order.
    fn all(&self) -> &[Record];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    fn contains_id(&self, id: RecordId) -> bool {
        self.all().iter().any(|record| record.id == id)
    }
}
