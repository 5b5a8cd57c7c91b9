//! A randomized binary search tree.
//!
//! The [`treap`] module provides `TreapSet`, an ordered set that stays balanced in expectation by
//! assigning each value a random priority and keeping the tree heap-ordered on it.

pub mod treap;
