use std::collections::HashSet;

use tagstore_core::{DuplicatePolicy, Record, RecordId, RecordStore, StoreError};

/// In-memory implementation of [`RecordStore`] backed by a `Vec`.
///
/// Records keep their insertion order. Id uniqueness is only checked when the
/// store is configured with [`DuplicatePolicy::Reject`]; the id set is kept up
/// to date either way so [`RecordStore::contains_id`] stays O(1).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    ids: HashSet<RecordId>,
    policy: DuplicatePolicy,
}

impl InMemoryStore {
    /// Creates an empty store that accepts duplicate ids.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Rebuilds a store from previously persisted records.
    ///
    /// The records are taken verbatim, duplicates included, so that a
    /// save/load cycle reproduces the exact sequence. The policy only applies
    /// to records added afterwards.
    pub fn from_records(records: Vec<Record>, policy: DuplicatePolicy) -> Self {
        let ids = records.iter().map(|record| record.id).collect();
        Self {
            records,
            ids,
            policy,
        }
    }
}

impl RecordStore for InMemoryStore {
    fn add(&mut self, record: Record) -> Result<(), StoreError> {
        if self.policy == DuplicatePolicy::Reject && self.ids.contains(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.ids.insert(record.id);
        self.records.push(record);
        Ok(())
    }

    fn all(&self) -> &[Record] {
        &self.records
    }

    fn contains_id(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }
}
