//! Tag search engine and query service.
//!
//! [`engine::search_uncached`] performs the full scan. [`QueryService`] puts
//! a [`SearchCache`](tagstore_cache::SearchCache) in front of it and keeps the
//! cache coherent with the record store under a single lock.
//!
//! # Example
//!
//! ```rust
//! use tagstore_core::Record;
//! use tagstore_search::QueryService;
//!
//! let service = QueryService::in_memory();
//! service.add(Record::new(1, "https://example.com", ["go", "db"])).unwrap();
//!
//! let found = service.search("go");
//! assert_eq!(found.len(), 1);
//! assert!(service.search("rust").is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod service;

pub use config::ServiceConfig;
pub use engine::search_uncached;
pub use service::QueryService;
