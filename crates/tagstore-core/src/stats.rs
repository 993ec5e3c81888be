use serde::{Deserialize, Serialize};

/// Counters exposed by the search cache.
///
/// All counters are monotonic for the lifetime of the process. The entry
/// gauges reflect the current cache sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Searches served from the result cache.
    pub search_cache_hits: u64,
    /// Searches served from the zero-result cache.
    pub zero_result_hits: u64,
    /// Searches that fell through to a full scan.
    #[serde(default)]
    pub misses: u64,
    /// Number of times both caches were cleared.
    #[serde(default)]
    pub invalidations: u64,
    #[serde(default, skip_deserializing)]
    pub zero_entries: usize,
    #[serde(default, skip_deserializing)]
    pub result_entries: usize,
}

impl CacheStats {
    /// Keeps only the monotonic counters, dropping the entry gauges.
    ///
    /// Used when counters outlive the caches they describe, e.g. across a restart.
    pub fn counters(&self) -> Self {
        Self {
            zero_entries: 0,
            result_entries: 0,
            ..*self
        }
    }
}
