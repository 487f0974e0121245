//! Random inputs and assertions shared by the unit tests.

use std::fmt::Debug;

use rand::Rng;

use crate::collection::{DoublyLinkedList, NodeId};

pub(crate) const DEFAULT_LENGTH: usize = 10;

/// Uniform integer in `min..=max`
pub(crate) fn random_int(min: i32, max: i32) -> i32 {
    rand::thread_rng().gen_range(min..=max)
}

/// `len` integers in `-1000..=1000`
pub(crate) fn random_vec(len: usize) -> Vec<i32> {
    (0..len).map(|_| random_int(-1000, 1000)).collect()
}

/// `len` integers in `0..=1000`
pub(crate) fn random_positive_vec(len: usize) -> Vec<i32> {
    (0..len).map(|_| random_int(0, 1000)).collect()
}

/// `len` copies of one random integer
pub(crate) fn identical_vec(len: usize) -> Vec<i32> {
    vec![random_int(-1000, 1000); len]
}

#[track_caller]
pub(crate) fn assert_same_sequence<'a, T, I>(actual: I, expected: &[T])
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let actual: Vec<&T> = actual.into_iter().collect();
    let expected: Vec<&T> = expected.iter().collect();
    assert_eq!(actual, expected);
}

/// A random node of the chain starting at `head`, never its first or last
/// node when the chain has at least three nodes.
pub(crate) fn random_inner_node<T>(list: &DoublyLinkedList<T>, head: NodeId) -> NodeId {
    let len = list.length_from(head);
    let mut rng = rand::thread_rng();
    let steps = if len < 3 {
        rng.gen_range(0..len.max(1))
    } else {
        rng.gen_range(1..len - 1)
    };
    let mut node = head;
    for _ in 0..steps {
        match list.next(node) {
            Some(next) => node = next,
            None => break,
        }
    }
    node
}
