use std::fmt;

use super::snode::{self, Iter, Link, Nodes, SNode};

/// A singly linked list of owned cells.
///
/// The list is a handle on the first cell; every cell is itself a view on the
/// rest of the list (see [`SNode::next`]). Cells are owned by their
/// predecessor, so a chain can not be made cyclic and every traversal ends.
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
}

impl<T> Drop for SinglyLinkedList<T> {
    #[inline(always)]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Returns a new empty list
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns a new list holding `value`
    pub fn with_value(value: T) -> Self {
        Self {
            head: Some(SNode::new(value, None)),
        }
    }

    #[inline(always)]
    /// Returns `true` if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of values in the list
    ///
    /// # Complexity
    ///  * O(n), the length is not cached
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The first cell, a view on the whole chain
    pub fn head(&self) -> Option<&SNode<T>> {
        self.head.as_deref()
    }

    #[inline(always)]
    /// # Returns
    ///  * `Some(front)` the front of the list when `!self.is_empty()`
    ///  * `None` when `self.is_empty()`
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(SNode::value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    pub fn clear(&mut self) {
        if self.head.is_some() {
            snode::drop_chain(&mut self.head);
        }
    }

    /// Adds a value at the end of the list
    ///
    /// # Complexity
    ///  * O(n)
    pub fn add(&mut self, value: T) -> &mut Self {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(SNode::new(value, None));
        self
    }

    /// Removes every value equal to `value`
    ///
    /// Matching cells are overwritten by their successor (copy-down) rather
    /// than relinked, so removing the front rewrites the head cell in place.
    ///
    /// # Complexity
    ///  * O(n)
    pub fn remove(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        snode::remove_where(&mut self.head, |node| node.value == *value);
        self
    }

    /// Values from head to tail
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            pos: self.head.as_deref(),
        }
    }

    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            pos: self.head.as_deref(),
        }
    }

    /// Adds a value at the front of the list
    ///
    /// # Complexity
    ///  * O(1)
    pub(crate) fn push_front(&mut self, value: T) {
        let old_head = self.head.take();
        self.head = Some(SNode::new(value, old_head));
    }

    /// Removes and returns the front of the list; the next cell becomes the
    /// head.
    ///
    /// # Complexity
    ///  * O(1)
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        snode::unlink(&mut self.head)
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once, then keep appending there.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(SNode::new(value, None));
            cursor = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{identical_vec, random_int, random_vec};

    #[test]
    fn test_empty() {
        let mut list = SinglyLinkedList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.head().is_none());
        assert!(list.to_vec().is_empty());
        assert!(list.pop_front().is_none());
        list.remove(&1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_to_vec() {
        let values = random_vec(10);
        let list: SinglyLinkedList<i32> = values.iter().copied().collect();
        assert_eq!(list.to_vec(), values);
        assert_eq!(list.len(), values.len());
    }

    #[test]
    fn test_with_value() {
        let value = random_int(-1000, 1000);
        let list = SinglyLinkedList::with_value(value);
        assert_eq!(list.to_vec(), vec![value]);
        assert!(list.head().unwrap().is_last());
    }

    #[test]
    fn test_add() {
        let value = random_int(-1000, 1000);
        let mut list = SinglyLinkedList::new();
        list.add(value);
        assert_eq!(list.front(), Some(&value));

        list.add(2).add(3).add(4);
        assert_eq!(list.to_vec(), vec![value, 2, 3, 4]);
    }

    #[test]
    fn test_remove_all_identical() {
        let values = identical_vec(10);
        let mut list: SinglyLinkedList<i32> = values.iter().copied().collect();
        list.remove(&values[0]);
        assert!(list.is_empty());
        assert!(list.front().is_none());
    }

    #[test]
    fn test_remove() {
        let mut list = SinglyLinkedList::with_value(2);
        list.add(1).add(2).add(2).add(3);
        list.remove(&2);
        assert_eq!(list.to_vec(), vec![1, 3]);
        list.remove(&42);
        assert_eq!(list.to_vec(), vec![1, 3]);
        list.remove(&3);
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn test_remove_rewrites_head_in_place() {
        let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
        let head_before = list.head().unwrap() as *const SNode<i32>;
        list.remove(&1);
        let head_after = list.head().unwrap() as *const SNode<i32>;
        assert_eq!(head_before, head_after);
        assert_eq!(list.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_front_ops() {
        let mut list = SinglyLinkedList::new();
        list.push_front(1);
        list.push_front(2);
        list.add(0);
        assert_eq!(list.to_vec(), vec![2, 1, 0]);
        *list.front_mut().unwrap() = 5;
        assert_eq!(list.pop_front(), Some(5));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_extend_and_eq() {
        let mut a: SinglyLinkedList<i32> = [1, 2].into_iter().collect();
        a.extend([3, 4]);
        let b: SinglyLinkedList<i32> = (1..=4).collect();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[1, 2, 3, 4]");
        assert_eq!(a.nodes().map(|n| *n.value()).sum::<i32>(), 10);
    }

    #[test]
    fn test_clear() {
        let mut list: SinglyLinkedList<i32> = (0..100_000).collect();
        list.clear();
        assert!(list.is_empty());
    }
}
