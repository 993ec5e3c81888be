//! Two-tier search cache for Tagstore.
//!
//! A term is either unknown, known to match nothing (held by the
//! [`ZeroResultCache`]) or known to match a non-empty record sequence (held by
//! the [`ResultCache`]). [`SearchCache`] composes the two and keeps them
//! disjoint.

pub mod result;
pub mod search;
pub mod zero;

pub use result::ResultCache;
pub use search::{CacheLookup, SearchCache, Source, TermState};
pub use tagstore_core::CacheStats;
pub use zero::ZeroResultCache;
