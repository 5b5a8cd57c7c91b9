//! Probabilistic binary search tree where each node also maintains the heap invariant.
//!
//! Every node carries a random priority and the tree is kept heap-ordered on those priorities, the
//! smallest priority sitting at the root. Insertions and removals restore the heap order with
//! rotations, which never disturb the in-order sequence of values.

mod node;
mod set;
mod tree;

pub use self::set::{TreapSet, TreapSetIntoIter, TreapSetIter};
