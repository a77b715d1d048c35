//! Intrusive doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a `SlotArena` and are linked by `SlotId`, so callers hold
//! stable handles and every splice is O(1) without a search. Unlike a plain
//! deque, a node can exist in the arena without being linked: `unlink`
//! splices a node out but keeps it allocated together with the neighbor
//! links it had, which lets `replace_in_place` put a node back into exactly
//! the slot it (or another node) used to occupy.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬───────────────────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next, linked }                        │
//!   ├────────┼───────────────────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None,       next: Some(id_2), true  }   │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: Some(id_3), true  }   │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None,       true  }   │
//!   │ id_4   │ { value: D, prev: Some(id_3), next: None,       false }   │
//!   └────────┴───────────────────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail      (id_4 detached)
//! ```
//!
//! `head`/`tail` play the role of a sentinel: `front`, `back` and
//! `pop_back` on an empty list all return `None`.
//!
//! ## Operations
//! - `append(id)`: link a detached node at the back
//! - `insert_before(id, anchor)`: link a detached node right before `anchor`
//! - `replace_in_place(id, old)`: link a detached node between the
//!   recorded neighbors of the detached node `old`
//! - `unlink(id)`: splice out, keep the slot
//! - `remove(id)` / `pop_back()`: splice out and free the slot
//!
//! ## Performance
//! - every splice and boundary access: O(1)
//! - `iter`: O(n), O(1) to start
//!
//! Splice operations return `false` and leave the list untouched when their
//! guard conditions fail (node already linked, anchor not linked, recorded
//! neighbors no longer adjacent).
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
    linked: bool,
}

#[derive(Debug)]
/// Ordered sequence of arena nodes linked via `SlotId`.
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no node is linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes, linked or detached.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if `id` is an allocated node (linked or detached).
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns `true` if `id` is currently linked into the list.
    pub fn is_linked(&self, id: SlotId) -> bool {
        self.arena.get(id).is_some_and(|node| node.linked)
    }

    /// Returns the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the front of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the back of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the successor of a linked node.
    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena
            .get(id)
            .filter(|node| node.linked)
            .and_then(|node| node.next)
    }

    /// Returns the predecessor of a linked node.
    pub fn prev_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena
            .get(id)
            .filter(|node| node.linked)
            .and_then(|node| node.prev)
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> IntrusiveListIdIter<'_, T> {
        IntrusiveListIdIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of `(SlotId, &T)` from front to back.
    pub fn iter_entries(&self) -> IntrusiveListEntryIter<'_, T> {
        IntrusiveListEntryIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns the value for a node id, if allocated.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if allocated.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Allocates a node without linking it.
    pub fn insert_detached(&mut self, value: T) -> SlotId {
        self.arena.insert(Node {
            value,
            prev: None,
            next: None,
            linked: false,
        })
    }

    /// Allocates a node and links it at the back.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.insert_detached(value);
        let linked = self.append(id);
        debug_assert!(linked, "fresh node must append");
        id
    }

    /// Links a detached node as the new back; returns `false` if `id` is
    /// unknown or already linked.
    pub fn append(&mut self, id: SlotId) -> bool {
        match self.arena.get(id) {
            Some(node) if !node.linked => {},
            _ => return false,
        }
        let old_tail = self.tail;
        self.link_between(id, old_tail, None);
        true
    }

    /// Links the detached node `id` immediately before the linked node
    /// `anchor`.
    pub fn insert_before(&mut self, id: SlotId, anchor: SlotId) -> bool {
        if id == anchor {
            return false;
        }
        match self.arena.get(id) {
            Some(node) if !node.linked => {},
            _ => return false,
        }
        let prev = match self.arena.get(anchor) {
            Some(node) if node.linked => node.prev,
            _ => return false,
        };
        self.link_between(id, prev, Some(anchor));
        true
    }

    /// Links the detached node `id` between the neighbors `old` had when it
    /// was unlinked. `id == old` puts a node back where it was.
    ///
    /// Returns `false` without touching the list if either node is linked or
    /// if `old`'s recorded neighbors are no longer adjacent.
    pub fn replace_in_place(&mut self, id: SlotId, old: SlotId) -> bool {
        match self.arena.get(id) {
            Some(node) if !node.linked => {},
            _ => return false,
        }
        let (prev, next) = match self.arena.get(old) {
            Some(node) if !node.linked => (node.prev, node.next),
            _ => return false,
        };

        let after_prev = match prev {
            Some(prev_id) => match self.arena.get(prev_id) {
                Some(node) if node.linked => node.next,
                _ => return false,
            },
            None => self.head,
        };
        let before_next = match next {
            Some(next_id) => match self.arena.get(next_id) {
                Some(node) if node.linked => node.prev,
                _ => return false,
            },
            None => self.tail,
        };
        if after_prev != next || before_next != prev {
            return false;
        }

        self.link_between(id, prev, next);
        true
    }

    /// Splices a linked node out of the list, keeping it allocated along
    /// with its last neighbor links.
    pub fn unlink(&mut self, id: SlotId) -> bool {
        if self.len == 0 {
            return false;
        }
        let (prev, next) = match self.arena.get(id) {
            Some(node) if node.linked => (node.prev, node.next),
            _ => return false,
        };

        match prev.and_then(|prev_id| self.arena.get_mut(prev_id)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|next_id| self.arena.get_mut(next_id)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.linked = false;
        }
        self.len -= 1;
        true
    }

    /// Unlinks `id` if needed and frees its slot, returning the value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id);
        self.arena.remove(id).map(|node| node.value)
    }

    /// Removes the back node and returns its former id and value.
    pub fn pop_back(&mut self) -> Option<(SlotId, T)> {
        let id = self.tail?;
        self.unlink(id);
        self.arena.remove(id).map(|node| (id, node.value))
    }

    /// Clears the list and frees all nodes, detached ones included.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn link_between(&mut self, id: SlotId, prev: Option<SlotId>, next: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = prev;
            node.next = next;
            node.linked = true;
        } else {
            return;
        }

        match prev.and_then(|prev_id| self.arena.get_mut(prev_id)) {
            Some(prev_node) => prev_node.next = Some(id),
            None => self.head = Some(id),
        }
        match next.and_then(|next_id| self.arena.get_mut(next_id)) {
            Some(next_node) => next_node.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the list order as SlotIds from head to tail.
    pub fn debug_snapshot_ids(&self) -> Vec<SlotId> {
        self.iter_ids().collect()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            assert!(self.arena.values().all(|node| !node.linked));
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let node = self.arena.get(id).expect("node missing");
            assert!(node.linked);
            assert_eq!(node.prev, prev);
            if let Some(next_id) = node.next {
                let next_node = self.arena.get(next_id).expect("next node missing");
                assert_eq!(next_node.prev, Some(id));
            } else {
                assert_eq!(self.tail, Some(id));
            }

            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len);
        }

        assert_eq!(count, self.len);
        let linked = self.arena.values().filter(|node| node.linked).count();
        assert_eq!(linked, self.len);
    }
}

pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntrusiveListIter<'_, T> {}

impl<T> std::iter::FusedIterator for IntrusiveListIter<'_, T> {}

/// Iterator over SlotIds from front to back.
pub struct IntrusiveListIdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

/// Iterator over `(SlotId, &T)` pairs from front to back.
pub struct IntrusiveListEntryIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListEntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}

impl<'a, T> IntoIterator for &'a IntrusiveList<T> {
    type Item = &'a T;
    type IntoIter = IntrusiveListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn intrusive_list_basic_ops() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(values(&list), vec!["a", "c"]);

        assert_eq!(list.pop_back(), Some((c, "c")));
        assert_eq!(list.pop_back(), Some((a, "a")));
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        assert!(!list.contains(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_empty_boundaries() {
        let list: IntrusiveList<u8> = IntrusiveList::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert_eq!(list.iter().count(), 0);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_append_rejects_linked_node() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        assert!(!list.append(a));
        assert_eq!(list.len(), 1);

        let detached = list.insert_detached(2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.node_count(), 2);
        assert!(list.append(detached));
        assert_eq!(values(&list), vec![1, 2]);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_insert_before_head_and_middle() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let c = list.push_back("c");

        let b = list.insert_detached("b");
        assert!(list.insert_before(b, c));
        assert_eq!(values(&list), vec!["a", "b", "c"]);

        let z = list.insert_detached("z");
        assert!(list.insert_before(z, a));
        assert_eq!(values(&list), vec!["z", "a", "b", "c"]);
        assert_eq!(list.front_id(), Some(z));
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_insert_before_guards() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);

        // anchor not linked
        let loose = list.insert_detached(3);
        let other = list.insert_detached(4);
        assert!(!list.insert_before(other, loose));

        // new node already linked
        assert!(!list.insert_before(a, b));
        assert!(!list.insert_before(loose, loose));

        assert_eq!(values(&list), vec![1, 2]);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_unlink_keeps_slot() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.unlink(b));
        assert!(!list.unlink(b));
        assert!(list.contains(b));
        assert!(!list.is_linked(b));
        assert_eq!(list.get(b), Some(&"b"));
        assert_eq!(list.next_id(a), Some(c));
        assert_eq!(list.prev_id(c), Some(a));
        assert_eq!(list.len(), 2);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_replace_in_place_restores_position() {
        for victim in 0..3 {
            let mut list = IntrusiveList::new();
            let ids = [list.push_back(0), list.push_back(1), list.push_back(2)];

            assert!(list.unlink(ids[victim]));
            assert!(list.replace_in_place(ids[victim], ids[victim]));
            assert_eq!(values(&list), vec![0, 1, 2]);
            list.debug_validate_invariants();
        }
    }

    #[test]
    fn intrusive_list_replace_in_place_sole_node() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        assert!(list.unlink(a));
        assert!(list.is_empty());
        assert!(list.replace_in_place(a, a));
        assert_eq!(values(&list), vec!["a"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_replace_in_place_with_other_node() {
        let mut list = IntrusiveList::new();
        list.push_back("a");
        let b = list.push_back("b");
        list.push_back("c");

        assert!(list.unlink(b));
        let x = list.insert_detached("x");
        assert!(list.replace_in_place(x, b));
        assert_eq!(values(&list), vec!["a", "x", "c"]);

        // b's recorded neighbors are no longer adjacent
        let y = list.insert_detached("y");
        assert!(!list.replace_in_place(y, b));
        assert_eq!(list.remove(b), Some("b"));
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_replace_in_place_rejects_stale_slot() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        let b = list.push_back(2);
        list.push_back(3);

        assert!(list.unlink(b));
        let d = list.insert_detached(4);
        let front = list.front_id().unwrap();
        let after = list.next_id(front).unwrap();
        assert!(list.insert_before(d, after));

        assert!(!list.replace_in_place(b, b));
        assert_eq!(values(&list), vec![1, 4, 3]);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_iter_is_restartable() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        let first: Vec<_> = list.iter().copied().collect();
        let second: Vec<_> = (&list).into_iter().copied().collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn intrusive_list_id_and_entry_iters() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front_id(), Some(a));
        assert_eq!(list.back_id(), Some(c));

        let ids: Vec<_> = list.iter_ids().collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(list.debug_snapshot_ids(), ids);

        let entries: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
        assert_eq!(entries, vec![(a, "a"), (b, "b"), (c, "c")]);
    }

    #[test]
    fn intrusive_list_get_mut_updates_value() {
        let mut list = IntrusiveList::new();
        let id = list.push_back(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn intrusive_list_clear_resets_state() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.insert_detached(3);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.node_count(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_back(), None);
        list.debug_validate_invariants();
    }
}
