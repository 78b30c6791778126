//! LRU Recency List Module
//!
//! Doubly linked list stored in a slot arena, used to order cache entries
//! from most recently used (front) to least recently used (back).

// == Slot Id ==
/// Stable handle to a node in a [`RecencyList`].
///
/// A handle stays valid until its node is popped; the slot may then be
/// reused by a later push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Nodes live in a `Vec` of slots and link to each other by [`SlotId`]:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Freed slots are recycled through a free list, so the arena never grows
/// past the peak number of live entries.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    /// Returns true if the list has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Get ==
    /// Returns the value behind a handle without changing its position.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    // == Get Mut ==
    /// Returns the value behind a handle for in-place update.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    // == Back ==
    /// Returns the least recently used value without removing it.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    // == Push Front ==
    /// Inserts a value as most recently used and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                SlotId(idx)
            }
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            }
        };
        self.len += 1;
        self.attach_front(id);
        id
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    ///
    /// Returns false if the handle does not refer to a live node.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        if self.head != Some(id) {
            self.detach(id);
            self.attach_front(id);
        }
        true
    }

    // == Pop Back ==
    /// Removes and returns the least recently used value.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.detach(id);
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    // == Iter ==
    /// Iterates values from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn node(&self, id: SlotId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn detach(&mut self, id: SlotId) {
        let Some((prev, next)) = self.node(id).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev.and_then(|prev_id| self.node_mut(prev_id)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|next_id| self.node_mut(next_id)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head.and_then(|head_id| self.node_mut(head_id)) {
            Some(head_node) => head_node.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Walks the links and panics if head/tail, prev/next, or the live count
    /// disagree.
    #[cfg(test)]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id).expect("linked node missing");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len, "cycle in recency list");
        }

        assert_eq!(count, self.len);
        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, self.len);
        assert_eq!(live + self.free.len(), self.slots.len());
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(&node.value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_push_front_order() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(list.back(), Some(&"key1"));
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert!(list.move_to_front(a));

        assert_eq!(collect(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back(), Some(&"b"));
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_move_head_and_middle() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert!(list.move_to_front(c));
        assert_eq!(collect(&list), vec!["c", "b", "a"]);

        assert!(list.move_to_front(b));
        assert_eq!(collect(&list), vec!["b", "c", "a"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_pop_back() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.pop_back(), Some("key1"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_back(), Some("key2"));
        assert_eq!(list.pop_back(), Some("key3"));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_single_node_move_and_pop() {
        let mut list = RecencyList::new();

        let only = list.push_front("only");
        assert!(list.move_to_front(only));
        assert_eq!(list.back(), Some(&"only"));

        assert_eq!(list.pop_back(), Some("only"));
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_stale_handle() {
        let mut list = RecencyList::new();

        let id = list.push_front("a");
        list.pop_back();

        assert!(!list.move_to_front(id));
        assert_eq!(list.get(id), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_reuses_freed_slots() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.pop_back();

        let c = list.push_front("c");
        assert_eq!(a, c);
        assert_eq!(list.get(c), Some(&"c"));
        assert_eq!(collect(&list), vec!["c", "b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn test_list_get_mut() {
        let mut list = RecencyList::new();

        let id = list.push_front(String::from("old"));
        if let Some(value) = list.get_mut(id) {
            value.push_str("er");
        }

        assert_eq!(list.get(id).map(String::as_str), Some("older"));
    }

    #[test]
    fn test_list_interleaved_moves() {
        let mut list = RecencyList::new();

        // touch(a), touch(b), touch(c): [c, b, a]
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");
        // touch(a): [a, c, b]
        list.move_to_front(a);
        // touch(c): [c, a, b]
        list.move_to_front(c);
        // touch(b): [b, c, a]
        list.move_to_front(b);

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
        list.debug_validate_invariants();
    }
}
