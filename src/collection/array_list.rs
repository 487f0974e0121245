//! A singly linked list with the method set of an array.
//!
//! [`ArrayLikeList`] works on the same [`SNode`] chain as
//! [`SinglyLinkedList`] and adds the bulk operations one expects from an
//! array: `push`, `pop`, `shift`, `unshift`, `splice`, `at`, and the usual
//! callbacks. Nothing is cached, so `len` and index based operations walk the
//! chain.

use std::fmt;

use super::snode::{self, Iter, Link, Nodes, SNode};
use super::SinglyLinkedList;

pub struct ArrayLikeList<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Default for ArrayLikeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayLikeList<T> {
    pub const fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// # Complexity
    ///  * O(n)
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn head(&self) -> Option<&SNode<T>> {
        self.list.head()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    pub fn nodes(&self) -> Nodes<'_, T> {
        self.list.nodes()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    pub fn add(&mut self, value: T) -> &mut Self {
        self.list.add(value);
        self
    }

    /// Removes every value equal to `value`
    pub fn remove(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.list.remove(value);
        self
    }

    /// Adds `items` at the end of the list, in order
    ///
    /// # Complexity
    ///  * O(n + k)
    pub fn push<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.list.extend(items);
        self
    }

    /// Adds `items` before the first value of the list, in order
    ///
    /// # Complexity
    ///  * O(k)
    pub fn unshift<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        let head = self.list.head.take();
        self.list.head = Self::chain_before(items, head);
        self
    }

    /// Removes and returns the first value; the second cell is promoted into
    /// the head position.
    ///
    /// # Complexity
    ///  * O(1)
    pub fn shift(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Removes and returns the last value
    ///
    /// # Complexity
    ///  * O(n)
    pub fn pop(&mut self) -> Option<T> {
        if self.list.head.as_deref()?.is_last() {
            return self.list.pop_front();
        }
        let mut penultimate = self.list.head.as_deref_mut()?;
        while penultimate.next.as_ref().is_some_and(|last| !last.is_last()) {
            penultimate = penultimate.next.as_deref_mut()?;
        }
        snode::unlink(&mut penultimate.next)
    }

    /// Returns the value at `index`; negative indices count back from the end
    /// (`-1` is the last value).
    ///
    /// # Returns
    ///  * `None` when `index` is out of bounds
    pub fn at(&self, index: isize) -> Option<&T> {
        let index = self.resolve(index)?;
        self.iter().nth(index)
    }

    pub fn at_mut(&mut self, index: isize) -> Option<&mut T> {
        let index = self.resolve(index)?;
        let mut node = self.list.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(&mut node.value)
    }

    /// Calls `f` with every cell, front to back
    pub fn for_each<F>(&self, f: F) -> &Self
    where
        F: FnMut(&SNode<T>),
    {
        self.nodes().for_each(f);
        self
    }

    /// Replaces every value by `f(value)`, in place
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        let mut it = self.list.head.as_deref_mut();
        while let Some(node) = it {
            node.value = f(&node.value);
            it = node.next.as_deref_mut();
        }
        self
    }

    /// Folds every cell into an accumulator, front to back
    pub fn reduce<R, F>(&self, init: R, f: F) -> R
    where
        F: FnMut(R, &SNode<T>) -> R,
    {
        self.nodes().fold(init, f)
    }

    /// `true` if every cell satisfies `predicate` (and for an empty list)
    pub fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&SNode<T>) -> bool,
    {
        self.nodes().all(predicate)
    }

    /// `true` if at least one cell satisfies `predicate`
    pub fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&SNode<T>) -> bool,
    {
        self.nodes().any(predicate)
    }

    /// Keeps only the cells satisfying `predicate`, in place.
    ///
    /// Rejected cells are removed by copy-down, so a promoted cell is
    /// inspected again together with its new successor.
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&SNode<T>) -> bool,
    {
        snode::remove_where(&mut self.list.head, |node| !predicate(node));
        self
    }

    /// Removes `delete_count` values starting at `start` and inserts `items`
    /// in their place.
    ///
    /// A negative `start` counts back from the end. When `start` is still out
    /// of bounds, nothing is removed and `items` are appended.
    ///
    /// # Returns
    ///  * The removed values, in order
    pub fn splice<I>(&mut self, start: isize, delete_count: usize, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let Some(start) = self.resolve(start) else {
            log::trace!("splice start {} out of bounds, appending", start);
            self.push(items);
            return Vec::new();
        };

        let link = Self::link_at(&mut self.list.head, start);
        let mut removed = Vec::new();
        for _ in 0..delete_count {
            match snode::unlink(link) {
                Some(value) => removed.push(value),
                None => break,
            }
        }
        let rest = link.take();
        *link = Self::chain_before(items, rest);
        removed
    }

    /// Maps a possibly negative index to an in-bounds position.
    fn resolve(&self, index: isize) -> Option<usize> {
        let len = self.len();
        let index = if index < 0 {
            num::cast::<usize, isize>(len)?.checked_add(index)?
        } else {
            index
        };
        num::cast::<isize, usize>(index).filter(|index| *index < len)
    }

    /// The link owning the cell at `index`, or the trailing empty link.
    fn link_at(head: &mut Link<T>, index: usize) -> &mut Link<T> {
        let mut cursor = head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    fn chain_before<I: IntoIterator<Item = T>>(items: I, rest: Link<T>) -> Link<T> {
        let items: Vec<T> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(rest, |next, value| Some(SNode::new(value, next)))
    }
}

impl<T> Extend<T> for ArrayLikeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push(iter);
    }
}

impl<T> FromIterator<T> for ArrayLikeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.push(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayLikeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayLikeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

impl<T: PartialEq> PartialEq for ArrayLikeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}
