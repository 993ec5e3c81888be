use std::time::Instant;

use parking_lot::Mutex;
use tagstore_cache::{SearchCache, TermState};
use tagstore_core::{
    CacheStats, DuplicatePolicy, Record, RecordStore, Snapshot, StoreError, TagQuery,
};
use tagstore_storage::InMemoryStore;
use tracing::{info, trace};

use crate::config::ServiceConfig;
use crate::engine;

struct Inner<S> {
    store: S,
    cache: SearchCache,
}

/// Cached tag search over a [`RecordStore`].
///
/// The store and both cache tiers sit behind one mutex. A search holds it
/// for the whole lookup, scan and write-back sequence, and an add holds it
/// across the append and the invalidation. Every cached outcome therefore
/// matches what a fresh scan of the current store would return.
pub struct QueryService<S = InMemoryStore> {
    inner: Mutex<Inner<S>>,
}

impl<S: RecordStore> QueryService<S> {
    /// Creates a new service over `store` with empty caches.
    pub fn new(store: S) -> Self {
        Self::with_stats(store, CacheStats::default())
    }

    /// Creates a new service whose cache counters continue from `stats`.
    pub fn with_stats(store: S, stats: CacheStats) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store,
                cache: SearchCache::with_stats(stats),
            }),
        }
    }

    /// Returns every record tagged with exactly `term`, in insertion order.
    ///
    /// Served from the zero-result cache, then the result cache, and
    /// otherwise computed by a full scan whose result is cached.
    pub fn search(&self, term: &str) -> Vec<Record> {
        let started = Instant::now();

        let (results, source) = {
            let mut guard = self.inner.lock();
            let Inner { store, cache } = &mut *guard;
            cache.get_or_compute(term, |term| engine::search_uncached(store.all(), term))
        };

        info!(
            term,
            results = results.len(),
            cached = source.is_cached(),
            source = ?source,
            elapsed = ?started.elapsed(),
            "search completed"
        );
        results
    }

    /// Scans the store without consulting or updating the cache.
    pub fn search_uncached(&self, term: &str) -> Vec<Record> {
        let guard = self.inner.lock();
        engine::search_uncached(guard.store.all(), term)
    }

    /// Appends `record` and invalidates both cache tiers.
    ///
    /// A rejected record leaves the store and the caches untouched.
    pub fn add(&self, record: Record) -> Result<(), StoreError> {
        let id = record.id;
        let mut guard = self.inner.lock();
        guard.store.add(record)?;
        guard.cache.invalidate_all();
        trace!(id, records = guard.store.len(), "record added");
        Ok(())
    }

    /// Drops every cached search result.
    pub fn invalidate_all(&self) {
        self.inner.lock().cache.invalidate_all();
    }

    /// A copy of all records, taken under the lock.
    pub fn records(&self) -> Vec<Record> {
        self.inner.lock().store.all().to_vec()
    }

    /// A consistent snapshot of the records and cache counters.
    pub fn snapshot(&self) -> Snapshot {
        let guard = self.inner.lock();
        Snapshot::new(guard.store.all().to_vec(), guard.cache.stats())
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().cache.stats()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cache state of `term`, without counting as a lookup.
    pub fn term_state(&self, term: &str) -> TermState {
        self.inner.lock().cache.state(term)
    }
}

impl QueryService<InMemoryStore> {
    /// Creates a new service over an empty [`InMemoryStore`] that accepts
    /// duplicate ids.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// Creates a new service over `records` as configured by `config`.
    ///
    /// The records are taken verbatim, duplicates included. The duplicate
    /// policy only applies to records added afterwards.
    pub fn with_config(records: Vec<Record>, config: ServiceConfig) -> Self {
        info!(
            records = records.len(),
            duplicate_policy = ?config.duplicate_policy,
            "building query service"
        );
        Self::with_stats(
            InMemoryStore::from_records(records, config.duplicate_policy),
            config.stats,
        )
    }

    /// Rebuilds a service from a persisted snapshot.
    pub fn from_snapshot(snapshot: Snapshot, policy: DuplicatePolicy) -> Self {
        let config = ServiceConfig::builder()
            .duplicate_policy(policy)
            .stats(snapshot.stats)
            .build();
        Self::with_config(snapshot.records, config)
    }
}

impl Default for QueryService<InMemoryStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: RecordStore> TagQuery for QueryService<S> {
    fn search(&self, term: &str) -> Vec<Record> {
        QueryService::search(self, term)
    }

    fn add(&self, record: Record) -> Result<(), StoreError> {
        QueryService::add(self, record)
    }

    fn records(&self) -> Vec<Record> {
        QueryService::records(self)
    }

    fn stats(&self) -> CacheStats {
        QueryService::stats(self)
    }

    fn len(&self) -> usize {
        QueryService::len(self)
    }
}

impl<S> std::fmt::Debug for QueryService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, url: &str, tags: &[&str]) -> Record {
        Record::new(id, url, tags.iter().copied())
    }

    #[test]
    fn empty_store_caches_zero_result() {
        let service = QueryService::in_memory();

        assert!(service.search("x").is_empty());
        assert_eq!(service.term_state("x"), TermState::Zero);
        assert!(service.search("x").is_empty());

        let stats = service.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.zero_result_hits, 1);
    }

    #[test]
    fn second_search_served_from_result_cache() {
        let service = QueryService::in_memory();
        service.add(record(1, "a", &["go", "db"])).unwrap();

        let first = service.search("go");
        let second = service.search("go");

        assert_eq!(first, vec![record(1, "a", &["go", "db"])]);
        assert_eq!(first, second);
        assert_eq!(service.term_state("go"), TermState::Hit(1));
        assert_eq!(service.stats().search_cache_hits, 1);
    }

    #[test]
    fn add_invalidates_cached_results() {
        let service = QueryService::in_memory();
        service.add(record(1, "a", &["go", "db"])).unwrap();
        service.search("go");

        service.add(record(2, "b", &["go"])).unwrap();
        assert_eq!(service.term_state("go"), TermState::Unknown);

        let ids: Vec<_> = service.search("go").into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn add_evicts_zero_result_term() {
        let service = QueryService::in_memory();
        service.add(record(1, "a", &["go"])).unwrap();
        assert!(service.search("missing").is_empty());
        assert_eq!(service.term_state("missing"), TermState::Zero);

        service.add(record(2, "b", &["missing"])).unwrap();

        assert_eq!(service.search("missing"), vec![record(2, "b", &["missing"])]);
    }

    #[test]
    fn rejected_add_keeps_cache() {
        let service = QueryService::new(InMemoryStore::with_policy(DuplicatePolicy::Reject));
        service.add(record(1, "a", &["go"])).unwrap();
        service.search("go");

        let err = service.add(record(1, "dup", &["go"])).unwrap_err();

        assert_eq!(err, StoreError::DuplicateId(1));
        assert_eq!(service.term_state("go"), TermState::Hit(1));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn snapshot_restores_records_and_counters() {
        let service = QueryService::in_memory();
        service.add(record(1, "a", &["go"])).unwrap();
        service.search("go");
        service.search("go");

        let restored = QueryService::from_snapshot(service.snapshot(), DuplicatePolicy::Allow);

        assert_eq!(restored.records(), service.records());
        assert_eq!(restored.stats().search_cache_hits, 1);
        assert_eq!(restored.term_state("go"), TermState::Unknown);
    }

    #[test]
    fn with_config_applies_policy_and_counters() {
        let stats = CacheStats {
            misses: 4,
            ..CacheStats::default()
        };
        let config = ServiceConfig::builder()
            .duplicate_policy(DuplicatePolicy::Reject)
            .stats(stats)
            .build();

        let service = QueryService::with_config(vec![record(1, "a", &["go"])], config);

        assert_eq!(service.len(), 1);
        assert_eq!(service.stats().misses, 4);
        assert_eq!(
            service.add(record(1, "b", &["go"])).unwrap_err(),
            StoreError::DuplicateId(1)
        );
    }

    #[test]
    fn invalidate_all_clears_both_tiers() {
        let service = QueryService::in_memory();
        service.add(record(1, "a", &["go"])).unwrap();
        service.search("go");
        service.search("nope");

        service.invalidate_all();

        let stats = service.stats();
        assert_eq!(stats.zero_entries, 0);
        assert_eq!(stats.result_entries, 0);
    }

    #[test]
    fn usable_as_trait_object() {
        let service: Box<dyn TagQuery> = Box::new(QueryService::in_memory());
        service.add(record(1, "a", &["go"])).unwrap();
        assert_eq!(service.search("go").len(), 1);
        assert_eq!(service.len(), 1);
    }
}
