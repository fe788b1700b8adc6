//! An ordered multiset implemented with an AVL tree, plus the classic
//! companion collections.
//!
//! [`AvlMultiset`] is the core of the crate: a height-balanced binary search
//! tree where duplicate values are collapsed into a single node with an
//! occurrence count. Insertion, removal and minimum lookup run in O(log n)
//! of the number of distinct values.
//!
//! ```
//! use avl_multiset::AvlMultiset;
//!
//! let mut bag = AvlMultiset::new();
//! bag.insert(20);
//! bag.insert(10);
//! bag.insert(20);
//! assert_eq!(bag.len(), 3);
//! assert_eq!(bag.find_min(), Ok(&10));
//! assert_eq!(bag.count(&20), 2);
//!
//! bag.remove(&20).unwrap();
//! assert_eq!(bag.count(&20), 1);
//! ```
//!
//! The companions are single-invariant structures with no rebalancing:
//! [`ArrayStack`], [`CircularQueue`], [`DoublyLinkedList`], [`MinHeap`] and
//! the two hash tables [`ChainingTable`] and [`ProbingTable`].

mod error;
mod hash;
mod heap;
mod list;
mod multiset;
mod queue;
mod stack;

pub use error::Error;
pub use hash::{ChainingTable, LinearProbe, Probe, ProbingTable};
pub use heap::MinHeap;
pub use list::{DoublyLinkedList, ListIter};
pub use multiset::{AvlMultiset, Iter};
pub use queue::CircularQueue;
pub use stack::ArrayStack;

#[cfg(test)]
mod proptests;
