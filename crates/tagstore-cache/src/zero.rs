use std::collections::HashSet;

/// Terms that matched no records when last searched.
#[derive(Debug, Clone, Default)]
pub struct ZeroResultCache {
    terms: HashSet<String>,
}

impl ZeroResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Returns `false` if the term was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.terms.insert(term.into())
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
