use std::fmt;

use crate::collection::SinglyLinkedList;

/// FIFO queue backed by a [`SinglyLinkedList`]; values enter at the back and
/// leave from the front.
pub struct Queue<T> {
    queue: SinglyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            queue: SinglyLinkedList::new(),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self {
            queue: SinglyLinkedList::with_value(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// # Complexity
    ///  * O(n)
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Adds `value` at the back of the queue
    ///
    /// # Complexity
    ///  * O(n)
    pub fn enqueue(&mut self, value: T) -> &mut Self {
        self.queue.add(value);
        self
    }

    /// Removes and returns the front of the queue
    ///
    /// # Returns
    ///  * `None` when the queue is empty
    /// # Complexity
    ///  * O(1)
    pub fn dequeue(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    /// The front of the queue, left in place
    pub fn peek(&self) -> Option<&T> {
        self.queue.front()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

/// The first item is dequeued first.
impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("front_to_back", &self.queue).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{random_int, random_vec, DEFAULT_LENGTH};

    #[test]
    fn test_empty() {
        let mut queue: Queue<i32> = random_vec(0).into_iter().collect();
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue() {
        let mut queue = Queue::new();
        let value = random_int(-1000, 1000);
        queue.enqueue(value);
        assert_eq!(queue.peek(), Some(&value));
        assert_eq!(Queue::with_value(value).peek(), Some(&value));
    }

    #[test]
    fn test_peek() {
        let mut queue = Queue::new();
        queue.enqueue(1).enqueue(2);
        assert_eq!(queue.peek(), queue.peek());
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dequeue() {
        let mut queue = Queue::new();
        queue.enqueue(1).enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_fifo_order() {
        let values = random_vec(DEFAULT_LENGTH);
        let mut queue: Queue<i32> = values.iter().copied().collect();
        queue.extend([7]);
        let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained[..DEFAULT_LENGTH], values[..]);
        assert_eq!(drained.last(), Some(&7));
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut queue = Queue::with_value(1);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(2);
        assert_eq!(format!("{:?}", queue), "Queue { front_to_back: [2] }");
    }
}
