use serde::{Deserialize, Serialize};

/// Identifier of a [`Record`].
///
/// Signed, so negative ids are accepted. Uniqueness across a store is
/// governed by [`DuplicatePolicy`](crate::DuplicatePolicy).
pub type RecordId = i64;

/// A stored, tagged URL.
///
/// Records are immutable once added to a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub url: String,
    /// Tags in the order they were supplied. Duplicates are kept as is.
    pub tags: Vec<String>,
}

impl Record {
    pub fn new<I, T>(id: RecordId, url: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id,
            url: url.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `term` is an exact, case-sensitive member of the tags.
    pub fn has_tag(&self, term: &str) -> bool {
        self.tags.iter().any(|tag| tag == term)
    }
}
