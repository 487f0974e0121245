//! Classic linear collections built on linked cells: a singly linked list,
//! an array-like linked list, a doubly linked list, a stack and a queue.

pub mod collection;
mod queue;
mod stack;
pub use collection::{ArrayLikeList, DoublyLinkedList, NodeId, SNode, SinglyLinkedList};
pub use queue::*;
pub use stack::*;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips() {
        let values = testing::random_vec(testing::DEFAULT_LENGTH);

        let slist: SinglyLinkedList<i32> = values.iter().copied().collect();
        assert_eq!(slist.to_vec(), values);

        let array_list: ArrayLikeList<i32> = values.iter().copied().collect();
        assert_eq!(array_list.to_vec(), values);
        assert_eq!(array_list.len(), values.len());

        let mut dlist = DoublyLinkedList::new();
        let head = dlist.chain(values.iter().copied()).unwrap();
        assert_eq!(dlist.to_vec(head), values);
        assert_eq!(dlist.length_from(head), values.len());
    }

    #[test]
    fn test_stack_and_queue_order() {
        let values = testing::random_vec(testing::DEFAULT_LENGTH);

        let mut stack: Stack<i32> = values.iter().copied().collect();
        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop()).collect();
        assert!(popped.iter().eq(values.iter().rev()));

        let mut queue: Queue<i32> = values.iter().copied().collect();
        let dequeued: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(dequeued, values);
    }
}
