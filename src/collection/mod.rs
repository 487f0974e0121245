mod snode;
pub use snode::{Iter, Nodes, SNode};
mod slist;
pub use slist::*;
mod array_list;
pub use array_list::*;

pub mod dlist;
pub use dlist::{DoublyLinkedList, NodeId};
