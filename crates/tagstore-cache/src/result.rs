use std::collections::HashMap;

use tagstore_core::Record;

/// Terms mapped to the non-empty record sequence they last matched.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    entries: HashMap<String, Vec<Record>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<&[Record]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Caches `records` for `term` unless the term is already cached.
    ///
    /// Empty sequences are refused; they belong in the
    /// [`ZeroResultCache`](crate::ZeroResultCache). Returns `true` if the
    /// entry was written.
    pub fn insert(&mut self, term: impl Into<String>, records: Vec<Record>) -> bool {
        if records.is_empty() {
            return false;
        }
        match self.entries.entry(term.into()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(records);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
