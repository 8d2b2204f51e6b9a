//! Recency-ordered doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a [`SlotArena`] and point at each other by [`SlotId`], so a
//! caller holding an id (the LRU index does) can unlink or promote that node
//! in O(1) without walking the list and without aliasing references.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_0   │ { value: C, prev: Some(id_2), next: None }  │
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_0 }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head (MRU) ─► [id_1] ◄──► [id_2] ◄──► [id_0] ◄── tail (LRU)
//! ```
//!
//! `None` is the "no node" sentinel: an empty list has `head == tail == None`,
//! the head has `prev == None` and the tail has `next == None`.
//!
//! ## Operations
//! - `push_front`: O(1), new node becomes head
//! - `pop_back`: O(1), removes the tail
//! - `move_to_front(id)`: O(1), unlink + relink at head
//! - `remove(id)`: O(1), unlink + free the slot
//! - `iter`: O(n), double-ended
//!
//! [`RecencyList::check_links`] walks the list in both directions and reports
//! the first broken link.

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked list whose nodes are addressed by [`SlotId`].
///
/// The front is the most recently used end; the back is the least recently
/// used end.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> RecencyList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Id of the most recently used node.
    #[inline]
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Id of the least recently used node.
    #[inline]
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    pub fn front(&self) -> Option<&T> {
        self.get(self.head?)
    }

    pub fn back(&self) -> Option<&T> {
        self.get(self.tail?)
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Links a new node in as head and returns its id.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let old_head = self.head;
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head {
            Some(old) => {
                if let Some(node) = self.arena.get_mut(old) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Unlinks and returns the tail value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks `id` and frees its slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Makes `id` the head. Returns `false` if `id` is not in the list.
    ///
    /// Already-head is a no-op; a tail or interior node is spliced out and
    /// relinked in front of the old head.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.unlink(id);
        self.link_front(id);
        true
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates values from front (MRU) to back (LRU).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Iterates `(SlotId, &T)` from front to back.
    pub fn iter_entries(&self) -> impl Iterator<Item = (SlotId, &T)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let id = cursor?;
            let node = self.arena.get(id)?;
            cursor = node.next;
            Some((id, &node.value))
        })
    }

    /// Verifies the chain in both directions.
    ///
    /// Walking forward from head must visit exactly `len` nodes, each with a
    /// `prev` pointing at the node before it, and end on `tail`. The backward
    /// walk from tail is checked the same way.
    pub fn check_links(&self) -> Result<(), InvariantError> {
        let len = self.len();
        match (self.head, self.tail) {
            (None, None) if len == 0 => return Ok(()),
            (None, None) => {
                return Err(InvariantError::new(format!(
                    "list holds {len} nodes but has no head or tail"
                )));
            },
            (Some(_), None) | (None, Some(_)) => {
                return Err(InvariantError::new("exactly one of head/tail is set"));
            },
            (Some(head), Some(tail)) => {
                if len == 1 && head != tail {
                    return Err(InvariantError::new("single-node list with head != tail"));
                }
            },
        }

        let mut steps = 0usize;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("dangling link to slot {}", id.0)))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "slot {} has prev {:?}, expected {:?}",
                    id.0, node.prev, prev
                )));
            }
            steps += 1;
            if steps > len {
                return Err(InvariantError::new("forward walk exceeds list length"));
            }
            prev = Some(id);
            cursor = node.next;
        }
        if steps != len || prev != self.tail {
            return Err(InvariantError::new(format!(
                "forward walk visited {steps} of {len} nodes"
            )));
        }

        steps = 0;
        let mut next = None;
        cursor = self.tail;
        while let Some(id) = cursor {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("dangling link to slot {}", id.0)))?;
            if node.next != next {
                return Err(InvariantError::new(format!(
                    "slot {} has next {:?}, expected {:?}",
                    id.0, node.next, next
                )));
            }
            steps += 1;
            if steps > len {
                return Err(InvariantError::new("backward walk exceeds list length"));
            }
            next = Some(id);
            cursor = node.prev;
        }
        if steps != len || next != self.head {
            return Err(InvariantError::new(format!(
                "backward walk visited {steps} of {len} nodes"
            )));
        }
        Ok(())
    }

    fn unlink(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.arena.get_mut(p) {
                    node.next = next;
                }
            },
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.arena.get_mut(n) {
                    node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = None;
        Some(())
    }

    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(old) => {
                if let Some(node) = self.arena.get_mut(old) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Double-ended iterator over a [`RecencyList`], front to back.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<T: Copy>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_front_orders_newest_first() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(order(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.len(), 3);
        list.check_links().unwrap();
    }

    #[test]
    fn empty_list_has_no_ends() {
        let list: RecencyList<u8> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert_eq!(list.iter().next(), None);
        list.check_links().unwrap();
    }

    #[test]
    fn single_node_is_head_and_tail() {
        let mut list = RecencyList::new();
        let id = list.push_front("only");
        assert_eq!(list.front_id(), Some(id));
        assert_eq!(list.back_id(), Some(id));
        assert!(list.move_to_front(id));
        list.check_links().unwrap();

        assert_eq!(list.pop_back(), Some("only"));
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        list.check_links().unwrap();
    }

    #[test]
    fn move_head_is_noop() {
        let mut list = RecencyList::new();
        list.push_front(1);
        let head = list.push_front(2);
        assert!(list.move_to_front(head));
        assert_eq!(order(&list), vec![2, 1]);
        list.check_links().unwrap();
    }

    #[test]
    fn move_tail_to_front() {
        let mut list = RecencyList::new();
        let tail = list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert!(list.move_to_front(tail));
        assert_eq!(order(&list), vec![1, 3, 2]);
        assert_eq!(list.back(), Some(&2));
        list.check_links().unwrap();
    }

    #[test]
    fn move_interior_to_front() {
        let mut list = RecencyList::new();
        list.push_front(1);
        let mid = list.push_front(2);
        list.push_front(3);

        assert!(list.move_to_front(mid));
        assert_eq!(order(&list), vec![2, 3, 1]);
        list.check_links().unwrap();
    }

    #[test]
    fn move_unknown_id_returns_false() {
        let mut list = RecencyList::new();
        let id = list.push_front(1);
        list.remove(id);
        assert!(!list.move_to_front(id));
        list.check_links().unwrap();
    }

    #[test]
    fn remove_interior_relinks_neighbours() {
        let mut list = RecencyList::new();
        list.push_front('a');
        let b = list.push_front('b');
        list.push_front('c');

        assert_eq!(list.remove(b), Some('b'));
        assert_eq!(order(&list), vec!['c', 'a']);
        assert_eq!(list.remove(b), None);
        list.check_links().unwrap();
    }

    #[test]
    fn pop_back_drains_oldest_first() {
        let mut list = RecencyList::new();
        for i in 0..4 {
            list.push_front(i);
        }
        let drained: Vec<_> = std::iter::from_fn(|| list.pop_back()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3]);
        assert!(list.is_empty());
    }

    #[test]
    fn iter_reverses_and_reports_len() {
        let mut list = RecencyList::new();
        for i in 0..5 {
            list.push_front(i);
        }
        let back_to_front: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(back_to_front, vec![0, 1, 2, 3, 4]);
        assert_eq!(list.iter().len(), 5);

        let mut it = list.iter();
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.next_back(), Some(&0));
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn iter_entries_pairs_ids_with_values() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let entries: Vec<_> = list.iter_entries().collect();
        assert_eq!(entries, vec![(b, &"b"), (a, &"a")]);
    }

    #[test]
    fn check_links_detects_corrupted_prev() {
        let mut list = RecencyList::new();
        let a = list.push_front(1);
        list.push_front(2);
        list.arena.get_mut(a).unwrap().prev = None;

        assert!(list.check_links().is_err());
    }

    #[test]
    fn check_links_detects_missing_tail() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.tail = None;

        let err = list.check_links().unwrap_err();
        assert!(err.message().contains("head/tail"));
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.clear();
        assert!(list.is_empty());
        list.check_links().unwrap();

        list.push_front(3);
        assert_eq!(order(&list), vec![3]);
        list.check_links().unwrap();
    }
}
