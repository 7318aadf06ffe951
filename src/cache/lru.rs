//! LRU List Module
//!
//! Recency ordering for cache eviction, as an arena-backed doubly linked list.

/// Link value for "no node".
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<T> {
    /// `None` while the slot sits on the free list
    item: Option<T>,
    prev: usize,
    next: usize,
}

// == LRU List ==
/// Tracks access order for LRU eviction.
///
/// Items live in a `Vec` arena and are linked by slot index:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// `push_front` hands back the slot index, which stays valid until the item
/// is removed. Every operation is O(1); freed slots are reused.
#[derive(Debug)]
pub struct LruList<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
    free: Vec<usize>,
    len: usize,
}

impl<T> LruList<T> {
    // == Constructor ==
    /// Creates an empty list. The arena grows as items are pushed.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Adds an item as the most recently used and returns its slot.
    pub fn push_front(&mut self, item: T) -> usize {
        let node = Node {
            item: Some(item),
            prev: NIL,
            next: NIL,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Touch ==
    /// Marks a slot as recently used (moves to front).
    ///
    /// Unoccupied slots are ignored.
    pub fn touch(&mut self, slot: usize) {
        if !self.is_occupied(slot) || self.head == slot {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Remove ==
    /// Removes the item at `slot`, freeing the slot for reuse.
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        let item = self.nodes.get_mut(slot)?.item.take()?;
        self.unlink(slot);
        self.free.push(slot);
        self.len -= 1;
        Some(item)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used item.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        self.remove(self.tail)
    }

    // == Peek Back ==
    /// Returns the least recently used item without removing it.
    #[allow(dead_code)]
    pub fn peek_back(&self) -> Option<&T> {
        if self.tail == NIL {
            return None;
        }
        self.get(self.tail)
    }

    // == Get ==
    /// Returns the item at `slot`, or None if the slot is free.
    ///
    /// # Arguments
    /// * `slot` - Index returned by `push_front`
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.nodes.get(slot)?.item.as_ref()
    }

    // == Get Mut ==
    /// Mutable access to the item at `slot`. Does not change recency.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.nodes.get_mut(slot)?.item.as_mut()
    }

    // == Length ==
    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    /// Returns true if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates from most to least recently used without touching anything.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn is_occupied(&self, slot: usize) -> bool {
        self.nodes.get(slot).is_some_and(|node| node.item.is_some())
    }

    fn link_front(&mut self, slot: usize) {
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.head;
        if self.head == NIL {
            self.tail = slot;
        } else {
            self.nodes[self.head].prev = slot;
        }
        self.head = slot;
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }
}

impl<T> Default for LruList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Front-to-back (MRU to LRU) iterator over an [`LruList`].
pub struct Iter<'a, T> {
    list: &'a LruList<T>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        node.item.as_ref()
    }
}
