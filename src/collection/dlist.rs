//! Doubly linked nodes living in an arena.
//!
//! Nodes are addressed through [`NodeId`] handles and may form several
//! disjoint chains inside one [`DoublyLinkedList`]. `next` is the forward
//! link of a chain, `prev` the back-reference used to walk to its start.
//!
//! Removing a node from its chain leaves it *detached* (no `prev`, no
//! `next`) but alive: the caller keeps the handle and may relink it or
//! [`release`](DoublyLinkedList::release) its slot.
//!
//! Closing a chain into a ring (`append(last, first)`) is allowed, but then
//! `first`, `last` and every traversal of that chain never end.

use std::fmt;

/// Handle to a node of a [`DoublyLinkedList`].
///
/// Handles to released nodes are stale: every lookup through them fails,
/// even once the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

struct DNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

enum Entry<T> {
    Occupied(DNode<T>),
    Vacant { next_free: Option<usize> },
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Number of live nodes, linked or not
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases every node; all handles become stale.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.node(index).is_some() {
                self.vacate(index);
            }
        }
        debug_assert_eq!(self.len, 0);
    }

    /// Creates a detached node holding `value`.
    pub fn insert(&mut self, value: T) -> NodeId {
        let node = DNode {
            value,
            prev: None,
            next: None,
        };
        self.len += 1;
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                self.free = match slot.entry {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied(_) => unreachable!("free list points at a live node"),
                };
                slot.entry = Entry::Occupied(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Builds a chain holding `values` in order.
    ///
    /// # Returns
    ///  * `Some(head)` the first node of the new chain
    ///  * `None` when `values` is empty
    pub fn chain<I: IntoIterator<Item = T>>(&mut self, values: I) -> Option<NodeId> {
        let mut values = values.into_iter();
        let head = self.insert(values.next()?);
        let mut current = head;
        for value in values {
            let node = self.insert(value);
            current = self.append(current, node)?;
        }
        Some(head)
    }

    /// `true` if `id` refers to a live node of this list
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.resolve(id).and_then(|index| self.node(index)).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.resolve(id)?;
        self.node_mut(index).map(|node| &mut node.value)
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.node(index)?.prev.map(|prev| self.id_of(prev))
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.node(index)?.next.map(|next| self.id_of(next))
    }

    /// `true` if `id` is live and linked to nothing
    pub fn is_detached(&self, id: NodeId) -> bool {
        self.resolve(id)
            .and_then(|index| self.node(index))
            .is_some_and(|node| node.prev.is_none() && node.next.is_none())
    }

    /// Links `node` right after `at`.
    ///
    /// The former successor of `at` is cut off and becomes the head of its
    /// own chain. If `node` had a predecessor, that predecessor now ends its
    /// chain.
    ///
    /// # Returns
    ///  * `Some(node)` so that calls can be chained
    ///  * `None` when a handle is stale or `node == at`
    pub fn append(&mut self, at: NodeId, node: NodeId) -> Option<NodeId> {
        let (at_index, node_index) = self.resolve_pair(at, node)?;

        if let Some(old_next) = self.node(at_index)?.next {
            if old_next != node_index {
                log::trace!("append: {} cut off from {}", self.id_of(old_next), at);
                self.node_mut(old_next)?.prev = None;
            }
        }
        if let Some(old_prev) = self.node(node_index)?.prev {
            if old_prev != at_index {
                self.node_mut(old_prev)?.next = None;
            }
        }

        self.node_mut(at_index)?.next = Some(node_index);
        self.node_mut(node_index)?.prev = Some(at_index);
        self.debug_check_links(at_index);
        self.debug_check_links(node_index);
        Some(node)
    }

    /// Links `node` right before `at`.
    ///
    /// The former predecessor of `at` is cut off and now ends its chain. If
    /// `node` had a successor, that successor becomes the head of its own
    /// chain.
    ///
    /// # Returns
    ///  * `Some(node)` so that calls can be chained
    ///  * `None` when a handle is stale or `node == at`
    pub fn prepend(&mut self, at: NodeId, node: NodeId) -> Option<NodeId> {
        let (at_index, node_index) = self.resolve_pair(at, node)?;

        if let Some(old_prev) = self.node(at_index)?.prev {
            if old_prev != node_index {
                log::trace!("prepend: {} cut off from {}", self.id_of(old_prev), at);
                self.node_mut(old_prev)?.next = None;
            }
        }
        if let Some(old_next) = self.node(node_index)?.next {
            if old_next != at_index {
                self.node_mut(old_next)?.prev = None;
            }
        }

        self.node_mut(at_index)?.prev = Some(node_index);
        self.node_mut(node_index)?.next = Some(at_index);
        self.debug_check_links(at_index);
        self.debug_check_links(node_index);
        Some(node)
    }

    /// Takes `id` out of its chain, bridging its neighbours, and clears its
    /// own links. The node stays alive.
    ///
    /// # Returns
    ///  * `Some(value)` the value of the now detached node
    ///  * `None` when `id` is stale
    pub fn remove(&mut self, id: NodeId) -> Option<&T> {
        let index = self.resolve(id)?;
        let node = self.node_mut(index)?;
        let (prev, next) = (node.prev.take(), node.next.take());

        if let Some(prev) = prev {
            self.node_mut(prev)?.next = next;
        }
        if let Some(next) = next {
            self.node_mut(next)?.prev = prev;
        }
        if let Some(prev) = prev {
            self.debug_check_links(prev);
        }
        self.node(index).map(|node| &node.value)
    }

    /// Frees a detached node and returns its value; `id` becomes stale.
    ///
    /// # Returns
    ///  * `None` when `id` is stale or still linked
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        let index = self.resolve(id)?;
        if !self.is_detached(id) {
            log::warn!("release: {} is still linked, remove it first", id);
            return None;
        }
        self.vacate(index)
    }

    /// The first node of the chain `id` belongs to
    pub fn first(&self, id: NodeId) -> Option<NodeId> {
        let mut index = self.resolve(id)?;
        while let Some(prev) = self.node(index)?.prev {
            index = prev;
        }
        Some(self.id_of(index))
    }

    /// The last node of the chain `id` belongs to
    pub fn last(&self, id: NodeId) -> Option<NodeId> {
        let mut index = self.resolve(id)?;
        while let Some(next) = self.node(index)?.next {
            index = next;
        }
        Some(self.id_of(index))
    }

    /// Number of nodes from `id` to the end of its chain.
    ///
    /// The count starts at `id`, not at the start of the chain: call it on
    /// [`first`](Self::first) for the full length.
    pub fn length_from(&self, id: NodeId) -> usize {
        self.iter_from(id).count()
    }

    /// Lazy forward iteration over the values from `id` to the end of its
    /// chain. A stale `id` yields nothing.
    pub fn iter_from(&self, id: NodeId) -> Iter<'_, T> {
        Iter {
            list: self,
            pos: self.resolve(id),
        }
    }

    /// All values of the chain `id` belongs to, from its first node
    pub fn to_vec(&self, id: NodeId) -> Vec<T>
    where
        T: Clone,
    {
        match self.first(id) {
            Some(first) => self.iter_from(first).cloned().collect(),
            None => Vec::new(),
        }
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        let slot = self.slots.get(id.index)?;
        match slot.entry {
            Entry::Occupied(_) if slot.generation == id.generation => Some(id.index),
            _ => None,
        }
    }

    fn resolve_pair(&self, a: NodeId, b: NodeId) -> Option<(usize, usize)> {
        let pair = (self.resolve(a)?, self.resolve(b)?);
        if pair.0 == pair.1 {
            return None;
        }
        Some(pair)
    }

    fn id_of(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn node(&self, index: usize) -> Option<&DNode<T>> {
        match &self.slots.get(index)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut DNode<T>> {
        match &mut self.slots.get_mut(index)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    fn vacate(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        let entry = std::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free,
            },
        );
        match entry {
            Entry::Occupied(node) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.free = Some(index);
                self.len -= 1;
                Some(node.value)
            }
            Entry::Vacant { .. } => {
                slot.entry = entry;
                None
            }
        }
    }

    #[inline]
    fn debug_check_links(&self, index: usize) {
        if cfg!(debug_assertions) {
            if let Some(node) = self.node(index) {
                if let Some(next) = node.next {
                    debug_assert_eq!(self.node(next).and_then(|n| n.prev), Some(index));
                }
                if let Some(prev) = node.prev {
                    debug_assert_eq!(self.node(prev).and_then(|n| n.next), Some(index));
                }
            }
        }
    }
}

/// Forward iterator over the values of a chain, see
/// [`DoublyLinkedList::iter_from`]
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    pos: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.pos?)?;
        self.pos = node.next;
        Some(&node.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chains = (0..self.slots.len())
            .filter(|index| self.node(*index).is_some_and(|node| node.prev.is_none()))
            .map(|index| self.iter_from(self.id_of(index)).collect::<Vec<_>>());
        f.debug_list().entries(chains).finish()
    }
}
