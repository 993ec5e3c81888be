use crate::error::StoreError;
use crate::record::Record;
use crate::stats::CacheStats;

/// The boundary-facing query service.
///
/// Implementations must make `search` and `add` atomic with respect to
/// each other: a search never observes a store mid-append, and never gets
/// a cache entry computed against a store that has since grown.
pub trait TagQuery: Send + Sync + 'static {
    /// Returns every record tagged with exactly `term`, in insertion order.
    fn search(&self, term: &str) -> Vec<Record>;

    /// Appends a record and invalidates every cached search.
    fn add(&self, record: Record) -> Result<(), StoreError>;

    /// A consistent copy of all records.
    fn records(&self) -> Vec<Record>;

    fn stats(&self) -> CacheStats;

    fn len(&self) -> usize {
        self.records().len()
    }
}
