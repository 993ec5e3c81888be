use tagstore_core::{CacheStats, DuplicatePolicy};
use typed_builder::TypedBuilder;

/// Configuration for building a [`QueryService`](crate::QueryService).
///
/// # Example
///
/// ```rust
/// use tagstore_core::DuplicatePolicy;
/// use tagstore_search::{QueryService, ServiceConfig};
///
/// let config = ServiceConfig::builder()
///     .duplicate_policy(DuplicatePolicy::Reject)
///     .build();
/// let service = QueryService::with_config(Vec::new(), config);
/// assert!(service.is_empty());
/// ```
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ServiceConfig {
    /// Applies to records added after construction.
    #[builder(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Counters to continue from, usually restored from a snapshot.
    #[builder(default)]
    pub stats: CacheStats,
}
