//! Cache Entry Module
//!
//! Defines the payload held in a single arena slot.

// == Cache Entry ==
/// A cached record together with the key it is stored under.
///
/// The key is kept alongside the value so that eviction from the back of
/// the recency list can find the index entry to drop without a reverse lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The cache key
    pub key: String,
    /// The stored record
    pub value: V,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    // == Replace ==
    /// Swaps in a new value, returning the old one.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
