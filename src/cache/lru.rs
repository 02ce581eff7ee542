//! LRU Recency List Module
//!
//! Implements the recency order as an intrusive doubly-linked list over
//! arena slot indices.

/// Null link marker.
const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Link {
    prev: usize,
    next: usize,
    linked: bool,
}

impl Link {
    const DETACHED: Link = Link {
        prev: NIL,
        next: NIL,
        linked: false,
    };
}

// == Recency List ==
/// Tracks access order of occupied slots for LRU eviction.
///
/// Each slot index owns exactly one link cell, so a slot can appear in the
/// list at most once:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Every operation is O(1) except iteration.
#[derive(Debug)]
pub struct RecencyList {
    links: Vec<Link>,
    head: usize,
    tail: usize,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list able to order `slots` slot indices.
    pub fn new(slots: usize) -> Self {
        Self {
            links: vec![Link::DETACHED; slots],
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Links a detached slot at the front (most recent).
    ///
    /// Pushing an already linked slot moves it instead, keeping the list
    /// free of duplicates.
    pub fn push_front(&mut self, idx: usize) {
        if self.links[idx].linked {
            self.move_to_front(idx);
            return;
        }

        self.links[idx] = Link {
            prev: NIL,
            next: self.head,
            linked: true,
        };
        if self.head != NIL {
            self.links[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
        self.len += 1;
    }

    // == Unlink ==
    /// Removes a slot from the list. Returns false if it was not linked.
    pub fn unlink(&mut self, idx: usize) -> bool {
        let Link { prev, next, linked } = self.links[idx];
        if !linked {
            return false;
        }

        if prev != NIL {
            self.links[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.links[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.links[idx] = Link::DETACHED;
        self.len -= 1;
        true
    }

    // == Move To Front ==
    /// Marks a linked slot as most recently used.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        if self.unlink(idx) {
            self.push_front(idx);
        }
    }

    // == Pop Back ==
    /// Unlinks and returns the least recently used slot.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<usize> {
        let idx = self.back()?;
        self.unlink(idx);
        Some(idx)
    }

    // == Back ==
    /// Returns the least recently used slot without unlinking it.
    pub fn back(&self) -> Option<usize> {
        (self.tail != NIL).then_some(self.tail)
    }

    // == Iterate ==
    /// Walks slot indices from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Length ==
    /// Returns the number of linked slots.
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == NIL {
            return None;
        }
        let idx = self.cursor;
        self.cursor = self.list.links[idx].next;
        Some(idx)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList) -> Vec<usize> {
        list.iter().collect()
    }

    #[test]
    fn test_list_new() {
        let list = RecencyList::new(4);
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
        assert!(order(&list).is_empty());
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new(4);

        list.push_front(0);
        list.push_front(1);
        list.push_front(2);

        assert_eq!(list.len(), 3);
        assert_eq!(order(&list), vec![2, 1, 0]);
        // slot 0 is oldest (added first)
        assert_eq!(list.back(), Some(0));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new(4);

        list.push_front(0);
        list.push_front(1);
        list.push_front(2);

        list.move_to_front(0);

        assert_eq!(list.len(), 3);
        assert_eq!(order(&list), vec![0, 2, 1]);
        assert_eq!(list.back(), Some(1));
    }

    #[test]
    fn test_move_to_front_of_tail_and_middle() {
        let mut list = RecencyList::new(4);
        for idx in 0..4 {
            list.push_front(idx);
        }

        // [3, 2, 1, 0]
        list.move_to_front(1);
        assert_eq!(order(&list), vec![1, 3, 2, 0]);
        list.move_to_front(0);
        assert_eq!(order(&list), vec![0, 1, 3, 2]);
        list.move_to_front(0);
        assert_eq!(order(&list), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_pop_back() {
        let mut list = RecencyList::new(4);

        list.push_front(0);
        list.push_front(1);
        list.push_front(2);

        assert_eq!(list.pop_back(), Some(0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
        assert!(order(&list).is_empty());
    }

    #[test]
    fn test_unlink_middle() {
        let mut list = RecencyList::new(4);

        list.push_front(0);
        list.push_front(1);
        list.push_front(2);

        assert!(list.unlink(1));

        assert_eq!(list.len(), 2);
        assert_eq!(order(&list), vec![2, 0]);
    }

    #[test]
    fn test_unlink_detached_slot() {
        let mut list = RecencyList::new(4);

        list.push_front(0);
        list.push_front(1);

        // Slot 3 was never linked - should not panic or affect existing slots
        assert!(!list.unlink(3));

        assert_eq!(list.len(), 2);
        assert_eq!(order(&list), vec![1, 0]);
    }

    #[test]
    fn test_push_same_slot_multiple_times() {
        let mut list = RecencyList::new(2);

        list.push_front(0);
        list.push_front(0);
        list.push_front(0);

        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_back(), Some(0));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_relink_after_unlink() {
        let mut list = RecencyList::new(3);

        list.push_front(0);
        list.push_front(1);
        list.unlink(0);
        list.push_front(0);

        assert_eq!(order(&list), vec![0, 1]);
        assert_eq!(list.back(), Some(1));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new(3);

        list.push_front(0);
        list.push_front(1);
        list.push_front(2);

        list.move_to_front(0);
        list.move_to_front(2);
        list.move_to_front(1);

        assert_eq!(list.pop_back(), Some(0));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
    }
}
