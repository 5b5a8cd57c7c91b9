use crate::treap::node::Node;
use log::trace;
use rand::Rng;
use std::cmp::{self, Ordering};
use std::collections::VecDeque;

pub type Tree<T> = Option<Box<Node<T>>>;

enum RemovalCase {
    RotateLeft,
    RotateRight,
    Unlink,
}

pub fn insert<T, R>(tree: &mut Tree<T>, value: T, rng: &mut R) -> bool
where
    T: Ord,
    R: Rng,
{
    match *tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let inserted = insert(&mut node.left, value, rng);
                if node.is_heap_property_violated(&node.left) {
                    trace!("rotating right above priority {}", node.priority);
                    node.rotate_right();
                }
                inserted
            },
            Ordering::Greater => {
                let inserted = insert(&mut node.right, value, rng);
                if node.is_heap_property_violated(&node.right) {
                    trace!("rotating left above priority {}", node.priority);
                    node.rotate_left();
                }
                inserted
            },
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value, rng.next_u32())));
            true
        },
    }
}

fn get_removal_case<T>(node: &Node<T>) -> RemovalCase {
    match (&node.left, &node.right) {
        (Some(ref left_node), Some(ref right_node)) => {
            if left_node.priority < right_node.priority {
                RemovalCase::RotateRight
            } else {
                RemovalCase::RotateLeft
            }
        },
        _ => RemovalCase::Unlink,
    }
}

// precondition: the root of `tree` is the node being removed
fn rotate_down<T>(tree: &mut Tree<T>) -> Option<T> {
    let case = get_removal_case(tree.as_ref()?);
    match case {
        RemovalCase::RotateRight => tree.as_mut().and_then(|node| {
            node.rotate_right();
            rotate_down(&mut node.right)
        }),
        RemovalCase::RotateLeft => tree.as_mut().and_then(|node| {
            node.rotate_left();
            rotate_down(&mut node.left)
        }),
        RemovalCase::Unlink => tree.take().map(|mut node| {
            // at most one of the children is present
            *tree = node.left.take().or_else(|| node.right.take());
            node.value
        }),
    }
}

pub fn remove<T: Ord>(tree: &mut Tree<T>, value: &T) -> Option<T> {
    let ordering = match *tree {
        Some(ref node) => value.cmp(&node.value),
        None => return None,
    };
    match ordering {
        Ordering::Less => tree.as_mut().and_then(|node| remove(&mut node.left, value)),
        Ordering::Greater => tree.as_mut().and_then(|node| remove(&mut node.right, value)),
        Ordering::Equal => rotate_down(tree),
    }
}

pub fn get<'a, T: Ord>(tree: &'a Tree<T>, value: &T) -> Option<&'a T> {
    tree.as_ref().and_then(|node| match value.cmp(&node.value) {
        Ordering::Less => get(&node.left, value),
        Ordering::Greater => get(&node.right, value),
        Ordering::Equal => Some(&node.value),
    })
}

pub fn contains<T: Ord>(tree: &Tree<T>, value: &T) -> bool {
    get(tree, value).is_some()
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
        None => 0,
    }
}

pub fn level_order<T>(tree: &Tree<T>) -> Vec<&T> {
    let mut ret = Vec::new();
    let mut queue = VecDeque::new();
    if let Some(ref node) = tree {
        queue.push_back(&**node);
    }
    while let Some(node) = queue.pop_front() {
        ret.push(&node.value);
        if let Some(ref left_node) = node.left {
            queue.push_back(&**left_node);
        }
        if let Some(ref right_node) = node.right {
            queue.push_back(&**right_node);
        }
    }
    ret
}

fn is_ordered<'a, T: Ord>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> bool {
    match tree {
        Some(ref node) => {
            lower.map_or(true, |lower| *lower < node.value)
                && upper.map_or(true, |upper| node.value < *upper)
                && is_ordered(&node.left, lower, Some(&node.value))
                && is_ordered(&node.right, Some(&node.value), upper)
        },
        None => true,
    }
}

fn is_heap_ordered<T>(tree: &Tree<T>) -> bool {
    match tree {
        Some(ref node) => {
            !node.is_heap_property_violated(&node.left)
                && !node.is_heap_property_violated(&node.right)
                && is_heap_ordered(&node.left)
                && is_heap_ordered(&node.right)
        },
        None => true,
    }
}

/// Checks both the binary search tree property and the heap property over the whole tree.
pub fn is_valid<T: Ord>(tree: &Tree<T>) -> bool {
    is_ordered(tree, None, None) && is_heap_ordered(tree)
}
