use std::fmt;

use crate::collection::SinglyLinkedList;

/// LIFO stack backed by a [`SinglyLinkedList`]; the top is the list's front.
pub struct Stack<T> {
    stack: SinglyLinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self {
            stack: SinglyLinkedList::new(),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self {
            stack: SinglyLinkedList::with_value(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// # Complexity
    ///  * O(n)
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Puts `value` on top of the stack
    ///
    /// # Complexity
    ///  * O(1)
    pub fn push(&mut self, value: T) -> &mut Self {
        self.stack.push_front(value);
        self
    }

    /// Removes and returns the top of the stack
    ///
    /// # Returns
    ///  * `None` when the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop_front()
    }

    /// The top of the stack, left in place
    pub fn peek(&self) -> Option<&T> {
        self.stack.front()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// The last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("top_down", &self.stack).finish()
    }
}
