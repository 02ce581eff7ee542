//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction.

mod entry;
mod lru;
mod records;
mod stats;
mod store;


pub(crate) use entry::CacheEntry;
pub(crate) use lru::RecencyList;
pub(crate) use records::RecordStore;

// Re-export public types
pub use stats::CacheStats;
pub use store::CacheStore;
