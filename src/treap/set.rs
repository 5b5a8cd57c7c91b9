use crate::treap::node::Node;
use crate::treap::tree;
use log::debug;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;

/// An ordered set implemented using a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a value and a priority. The value of any node is greater than all values in its left
/// subtree and less than all values occuring in its right subtree. The priority of a node is less
/// than or equal to the priority of all nodes in its subtrees, so the node with the smallest
/// priority is the root. By randomly generating priorities, the expected height of the tree is
/// proportional to the logarithm of the number of values.
///
/// Priorities are drawn from the random number generator owned by the set. The generator is
/// deterministic unless it is seeded or injected otherwise, so two sets built by the same sequence
/// of operations have the same shape.
///
/// # Examples
///
/// ```
/// use randomized_bst::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct TreapSet<T, R = XorShiftRng> {
    tree: tree::Tree<T>,
    len: usize,
    rng: R,
}

impl<T> TreapSet<T> {
    /// Constructs a new, empty `TreapSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(XorShiftRng::new_unseeded())
    }

    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a generator seeded
    /// with `seed`.
    ///
    /// # Panics
    ///
    /// Panics if every word of `seed` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::with_seed([1, 2, 3, 4]);
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Self::with_rng(XorShiftRng::from_seed(seed))
    }
}

impl<T, R> TreapSet<T, R>
where
    R: Rng,
{
    /// Constructs a new, empty `TreapSet<T, R>` that draws priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let set: TreapSet<u32, _> = TreapSet::with_rng(rand::thread_rng());
    /// assert!(set.is_empty());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        TreapSet {
            tree: None,
            len: 0,
            rng,
        }
    }

    /// Inserts a value into the set. Returns `false` and leaves the set untouched if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let TreapSet {
            ref mut tree,
            ref mut len,
            ref mut rng,
        } = self;
        let inserted = tree::insert(tree, value, rng);
        if inserted {
            *len += 1;
        } else {
            debug!("Ignored insert of a value already in the treap.");
        }
        inserted
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns it. Returns `None` if the value was not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let ret = tree::remove(&mut self.tree, value);
        if ret.is_some() {
            self.len -= 1;
        } else {
            debug!("Ignored removal of a value not in the treap.");
        }
        ret
    }
}

impl<T, R> TreapSet<T, R> {
    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        tree::contains(&self.tree, value)
    }

    /// Returns a reference to the value in the set that is equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::get(&self.tree, value)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values. The random number generator keeps its state.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of levels in the tree. An empty set has a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert(1);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the values of the set in breadth-first order, starting from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let values = set.level_order();
    /// assert_eq!(values.len(), 2);
    /// assert!(values[0] == &1 || values[0] == &2);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        tree::level_order(&self.tree)
    }

    /// Returns `true` if the underlying tree satisfies both the binary search tree property and
    /// the heap property. This walks every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// for i in 0..10 {
    ///     set.insert(i);
    /// }
    /// assert!(set.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        tree::is_valid(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapSetIter<'_, T> {
        TreapSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, R> IntoIterator for TreapSet<T, R> {
    type IntoIter = TreapSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        TreapSetIntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, R> IntoIterator for &'a TreapSet<T, R>
where
    T: 'a,
{
    type IntoIter = TreapSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreapSet<T, R>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct TreapSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Box<Node<T>>>,
}

impl<T> Iterator for TreapSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(node);
        }
        self.stack.pop().map(|mut node| {
            self.current = node.right.take();
            node.value
        })
    }
}

/// An iterator for `TreapSet<T, R>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreapSetIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for TreapSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let &Node {
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Default for TreapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> fmt::Debug for TreapSet<T, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreapSet")
            .field("len", &self.len)
            .field("root", &self.tree)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TreapSet;
    use std::collections::BTreeSet;

    #[test]
    fn test_len_empty() {
        let set: TreapSet<u32> = TreapSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: TreapSet<u32> = TreapSet::new();
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
        assert!(set.level_order().is_empty());
    }

    #[test]
    fn test_insert() {
        let mut set = TreapSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = TreapSet::new();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().filter(|value| **value == 5).count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = TreapSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_absent() {
        let mut set = TreapSet::with_seed([3, 1, 4, 1]);
        for value in &[5, 1, 9, 3, 7] {
            set.insert(*value);
        }
        let before = set.level_order().into_iter().cloned().collect::<Vec<u32>>();

        assert!(!set.remove(&4));
        assert_eq!(set.len(), 5);
        assert_eq!(
            set.level_order().into_iter().cloned().collect::<Vec<u32>>(),
            before,
        );
    }

    #[test]
    fn test_take() {
        let mut set = TreapSet::new();
        set.insert(String::from("a"));
        assert_eq!(set.take(&String::from("a")), Some(String::from("a")));
        assert_eq!(set.take(&String::from("a")), None);
    }

    #[test]
    fn test_sequential_inserts() {
        let mut set = TreapSet::new();
        for value in 1..=6 {
            set.insert(value);
        }

        assert!(set.contains(&4));
        assert!(!set.contains(&7));
        assert!(set.is_valid());

        assert!(set.remove(&2));
        assert!(!set.contains(&2));
        for value in &[1, 3, 4, 5, 6] {
            assert!(set.contains(value));
        }
        assert!(set.is_valid());
    }

    #[test]
    fn test_insert_remove_all() {
        let mut set = TreapSet::with_seed([1, 1, 1, 1]);
        let values = (0..1000).map(|i| (i * 7919) % 1000).collect::<Vec<u32>>();
        for value in &values {
            assert!(set.insert(*value));
        }
        assert_eq!(set.len(), 1000);
        assert!(set.is_valid());

        for value in values.iter().rev() {
            assert!(set.remove(value));
        }
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_same_seed_same_shape() {
        let mut n = TreapSet::with_seed([9, 8, 7, 6]);
        let mut m = TreapSet::with_seed([9, 8, 7, 6]);
        for value in 0..50 {
            n.insert(value);
            m.insert(value);
        }
        assert_eq!(n.level_order(), m.level_order());
    }

    #[test]
    fn test_height_is_logarithmic() {
        let mut set = TreapSet::with_seed([1, 2, 3, 4]);
        for value in 0..10_000 {
            set.insert(value);
        }
        // expected height is about 2.99 * log2(n), i.e. around 40 here
        assert!(set.height() < 100);
    }

    #[test]
    fn test_clear() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert!(set.insert(1));
    }

    #[test]
    fn test_into_iter() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_debug() {
        let mut set = TreapSet::new();
        set.insert(1);
        let output = format!("{:?}", set);
        assert!(output.starts_with("TreapSet { len: 1, root: Some(Node { value: 1, priority: "));
        assert!(output.ends_with("left: None, right: None }) }"));
    }

    quickcheck::quickcheck! {
        fn prop_matches_btree_set(ops: Vec<(bool, i8)>) -> bool {
            let mut set = TreapSet::new();
            let mut expected = BTreeSet::new();
            for (is_insert, value) in ops {
                if is_insert {
                    if set.insert(value) != expected.insert(value) {
                        return false;
                    }
                } else if set.remove(&value) != expected.remove(&value) {
                    return false;
                }
                if !set.is_valid() {
                    return false;
                }
            }
            set.len() == expected.len() && set.iter().eq(expected.iter())
        }
    }

    quickcheck::quickcheck! {
        fn prop_contains_inserted(values: Vec<u16>, probe: u16) -> bool {
            let mut set = TreapSet::new();
            for value in &values {
                set.insert(*value);
            }
            values.iter().all(|value| set.contains(value))
                && set.contains(&probe) == values.contains(&probe)
        }
    }
}
