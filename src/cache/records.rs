//! Record Store Module
//!
//! Fixed-size arena of entry slots plus a key index.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Record Store ==
/// Key-addressed storage for cache entries.
///
/// All slots are allocated up front at construction. Entries are placed in
/// free slots and the key index maps each key to its slot, so the store
/// never reallocates after creation.
#[derive(Debug)]
pub struct RecordStore<V> {
    /// Entry slots, `None` when free
    slots: Vec<Option<CacheEntry<V>>>,
    /// Key to slot index
    index: HashMap<String, usize>,
    /// Free slot indices, lowest index on top
    free: Vec<usize>,
}

impl<V> RecordStore<V> {
    // == Constructor ==
    /// Creates a store with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            index: HashMap::with_capacity(capacity),
            free: (0..capacity).rev().collect(),
        }
    }

    // == Slot Lookup ==
    /// Returns the slot holding `key`, if any.
    pub fn slot_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, idx: usize) -> Option<&CacheEntry<V>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut CacheEntry<V>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    // == Insert ==
    /// Places an entry for a key not yet present into a free slot.
    ///
    /// Returns the slot index, or None when every slot is occupied.
    pub fn insert(&mut self, entry: CacheEntry<V>) -> Option<usize> {
        debug_assert!(!self.index.contains_key(&entry.key));

        let idx = self.free.pop()?;
        self.index.insert(entry.key.clone(), idx);
        self.slots[idx] = Some(entry);
        Some(idx)
    }

    // == Remove ==
    /// Frees a slot and drops its key from the index.
    pub fn remove(&mut self, idx: usize) -> Option<CacheEntry<V>> {
        let entry = self.slots.get_mut(idx)?.take()?;
        self.index.remove(&entry.key);
        self.free.push(idx);
        Some(entry)
    }

    // == Length ==
    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
