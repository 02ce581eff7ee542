//! Cache Store Module
//!
//! Main cache engine combining the record arena with LRU recency tracking.

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyList, RecordStore};
use crate::error::{CacheError, Result};

/// Everything guarded by the store lock.
#[derive(Debug)]
struct LruState<V> {
    records: RecordStore<V>,
    order: RecencyList,
    stats: CacheStats,
}

impl<V> LruState<V> {
    // == Evict ==
    /// Drops the least recently used entry. No-op on an empty cache.
    fn evict(&mut self) -> Option<CacheEntry<V>> {
        let idx = self.order.pop_back()?;
        let entry = self.records.remove(idx);
        debug_assert!(entry.is_some(), "recency list pointed at an empty slot");

        if let Some(entry) = &entry {
            self.stats.record_eviction();
            debug!(key = %entry.key, "Evicted least recently used entry");
        }
        entry
    }
}

// == Cache Store ==
/// Fixed-capacity, thread-safe LRU cache keyed by string.
///
/// The record arena and the recency list live behind one lock. `set`, `get`
/// and `delete` hold it exclusively for their whole duration since each of
/// them changes recency. The read-only views (`find_key`, `keys`, `contains`, ...)
/// take it shared and never reorder entries.
///
/// Returned values are clones; the cache keeps sole ownership of what it
/// stores.
#[derive(Debug)]
pub struct CacheStore<V> {
    state: RwLock<LruState<V>>,
    capacity: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            state: RwLock::new(LruState {
                records: RecordStore::new(capacity),
                order: RecencyList::new(capacity),
                stats: CacheStats::new(capacity),
            }),
            capacity,
        })
    }

    // == Set ==
    /// Stores a value under `key`.
    ///
    /// An existing key has its value replaced and becomes most recently
    /// used. A new key evicts the least recently used entry first when the
    /// cache is full.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut guard = self.state.write();
        let state = &mut *guard;

        if let Some(idx) = state.records.slot_of(&key) {
            if let Some(entry) = state.records.get_mut(idx) {
                entry.replace(value);
            }
            state.order.move_to_front(idx);
            debug!(key = %key, "Updated cache entry");
            return;
        }

        if state.records.len() >= self.capacity {
            state.evict();
        }

        debug!(key = %key, "Added cache entry");
        if let Some(idx) = state.records.insert(CacheEntry::new(key, value)) {
            state.order.push_front(idx);
        }
        debug_assert_eq!(state.order.len(), state.records.len());
    }

    // == Get ==
    /// Returns a copy of the value under `key` and marks it most recently used.
    ///
    /// A miss has no side effect besides the miss counter.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_if(key, |_| true)
    }

    /// Like [`get`](Self::get), but only when the stored value satisfies
    /// `predicate`.
    ///
    /// The check and the promotion happen under the same write lock. A value
    /// that fails the check is left where it is and counts as a miss.
    pub fn get_if<F>(&self, key: &str, predicate: F) -> Option<V>
    where
        F: FnOnce(&V) -> bool,
    {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let matched = state
            .records
            .slot_of(key)
            .filter(|&idx| state.records.get(idx).is_some_and(|e| predicate(&e.value)));
        let Some(idx) = matched else {
            state.stats.record_miss();
            debug!(key = %key, "Cache miss");
            return None;
        };

        state.order.move_to_front(idx);
        state.stats.record_hit();
        debug!(key = %key, "Cache hit");
        state.records.get(idx).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes `key` from the cache.
    ///
    /// Deleting an absent key is a no-op. Returns whether an entry was removed.
    pub fn delete(&self, key: &str) -> bool {
        self.delete_if(key, |_| true)
    }

    /// Removes `key` only if its stored value satisfies `predicate`, checking
    /// and removing under one write lock.
    pub fn delete_if<F>(&self, key: &str, predicate: F) -> bool
    where
        F: FnOnce(&V) -> bool,
    {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let matched = state
            .records
            .slot_of(key)
            .filter(|&idx| state.records.get(idx).is_some_and(|e| predicate(&e.value)));
        let Some(idx) = matched else {
            return false;
        };

        state.order.unlink(idx);
        state.records.remove(idx);
        debug!(key = %key, "Deleted cache entry");
        true
    }

    // == Find Key ==
    /// Returns the key of the most recently used entry whose value matches
    /// `predicate`.
    ///
    /// Runs under the shared lock and does not touch recency. Callers that
    /// go on to use the match must look it up again with
    /// [`get_if`](Self::get_if) or [`delete_if`](Self::delete_if), since the
    /// key may have vanished or been given a new value in between.
    pub fn find_key<F>(&self, predicate: F) -> Option<String>
    where
        F: Fn(&V) -> bool,
    {
        let state = self.state.read();
        let key = state
            .order
            .iter()
            .filter_map(|idx| state.records.get(idx))
            .find(|entry| predicate(&entry.value))
            .map(|entry| entry.key.clone());
        key
    }

    /// Checks for `key` without touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.state.read().records.slot_of(key).is_some()
    }

    // == Keys ==
    /// Returns all keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        let state = self.state.read();
        let keys = state
            .order
            .iter()
            .filter_map(|idx| state.records.get(idx))
            .map(|entry| entry.key.clone())
            .collect();
        keys
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.read();
        let mut stats = state.stats.clone();
        stats.total_entries = state.records.len();
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    /// Returns the capacity bound fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Panics unless the arena and recency list agree on their contents.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let state = self.state.read();
        let order: Vec<usize> = state.order.iter().collect();

        assert!(state.records.len() <= self.capacity, "capacity exceeded");
        assert_eq!(order.len(), state.records.len(), "list and index disagree");
        assert_eq!(order.len(), state.order.len(), "list length drifted");

        let mut seen = std::collections::HashSet::new();
        for idx in order {
            assert!(seen.insert(idx), "slot {idx} linked twice");
            let entry = state.records.get(idx).expect("linked slot is empty");
            assert_eq!(state.records.slot_of(&entry.key), Some(idx));
        }
    }
}
