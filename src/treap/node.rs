use crate::treap::tree;
use std::mem;

/// A struct representing an internal node of a treap.
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub priority: u32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, priority: u32) -> Self {
        Node {
            value,
            priority,
            left: None,
            right: None,
        }
    }

    /// Returns `true` if the root of `subtree` would have to sit above this node for the heap
    /// property to hold.
    pub fn is_heap_property_violated(&self, subtree: &tree::Tree<T>) -> bool {
        match subtree {
            Some(ref child) => child.priority < self.priority,
            None => false,
        }
    }

    /// Promotes the right child to this position. This node becomes the left child of its former
    /// right child and adopts that child's left subtree as its new right subtree.
    ///
    /// # Panics
    ///
    /// Panics if the node has no right child.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
    }

    /// Promotes the left child to this position. Mirror image of `rotate_left`.
    ///
    /// # Panics
    ///
    /// Panics if the node has no left child.
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
    }
}
