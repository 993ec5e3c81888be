use tagstore_core::{CacheStats, Record};
use tracing::{debug, trace};

use crate::result::ResultCache;
use crate::zero::ZeroResultCache;

/// Cache state of a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermState {
    /// Not cached; the next search computes it.
    Unknown,
    /// Cached as matching nothing.
    Zero,
    /// Cached with this many matches.
    Hit(usize),
}

/// Outcome of looking a term up in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Zero,
    Hit(Vec<Record>),
    Miss,
}

/// Where a [`SearchCache::get_or_compute`] result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    ZeroResultCache,
    ResultCache,
    /// Computed on a miss and written back.
    Scan,
}

impl Source {
    pub fn is_cached(self) -> bool {
        self != Source::Scan
    }
}

/// A two-tier search cache.
///
/// # Operation Strategy
///
/// - **Lookup**: check the zero-result cache first, then the result cache.
///   Either hit bumps its counter.
/// - **Store**: write a computed result into exactly one tier, empty results
///   to the zero-result cache and everything else to the result cache. A term
///   that is already cached is left alone.
/// - **Invalidate**: clear both tiers at once.
///
/// The type does no locking of its own. It is meant to live behind the same
/// lock as the record store it describes, so that a write-back can never
/// race a store mutation.
#[derive(Debug, Clone, Default)]
pub struct SearchCache {
    zero: ZeroResultCache,
    results: ResultCache,
    stats: CacheStats,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache whose counters continue from `stats`.
    pub fn with_stats(stats: CacheStats) -> Self {
        Self {
            stats: stats.counters(),
            ..Self::default()
        }
    }

    pub fn lookup(&mut self, term: &str) -> CacheLookup {
        if self.zero.contains(term) {
            self.stats.zero_result_hits += 1;
            debug!(term, "zero-result cache hit");
            return CacheLookup::Zero;
        }

        if let Some(records) = self.results.get(term) {
            let records = records.to_vec();
            self.stats.search_cache_hits += 1;
            debug!(term, results = records.len(), "result cache hit");
            return CacheLookup::Hit(records);
        }

        trace!(term, "search cache miss");
        CacheLookup::Miss
    }

    /// Writes a computed result back into the matching tier.
    pub fn store(&mut self, term: &str, records: &[Record]) {
        if self.state(term) != TermState::Unknown {
            trace!(term, "term already cached, skipping write-back");
            return;
        }

        if records.is_empty() {
            self.zero.insert(term);
            trace!(term, "cached as zero-result");
        } else {
            self.results.insert(term, records.to_vec());
            trace!(term, results = records.len(), "cached search result");
        }
    }

    /// Returns the cached result for `term`, computing and caching it on a miss.
    ///
    /// `fetch` runs at most once, and only on a miss.
    pub fn get_or_compute<F>(&mut self, term: &str, fetch: F) -> (Vec<Record>, Source)
    where
        F: FnOnce(&str) -> Vec<Record>,
    {
        match self.lookup(term) {
            CacheLookup::Zero => (Vec::new(), Source::ZeroResultCache),
            CacheLookup::Hit(records) => (records, Source::ResultCache),
            CacheLookup::Miss => {
                self.stats.misses += 1;
                let records = fetch(term);
                self.store(term, &records);
                (records, Source::Scan)
            }
        }
    }

    /// Drops every cached term.
    pub fn invalidate_all(&mut self) {
        let dropped = self.zero.len() + self.results.len();
        self.zero.clear();
        self.results.clear();
        self.stats.invalidations += 1;
        debug!(dropped, "search cache invalidated");
    }

    pub fn state(&self, term: &str) -> TermState {
        if self.zero.contains(term) {
            TermState::Zero
        } else if let Some(records) = self.results.get(term) {
            TermState::Hit(records.len())
        } else {
            TermState::Unknown
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            zero_entries: self.zero.len(),
            result_entries: self.results.len(),
            ..self.stats
        }
    }

    /// Returns a reference to the zero-result tier.
    pub fn zero(&self) -> &ZeroResultCache {
        &self.zero
    }

    /// Returns a reference to the result tier.
    pub fn results(&self) -> &ResultCache {
        &self.results
    }
}
