use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Cursor, Iter};
use crate::collections::contiguous::Vector;
use crate::util::modification::ModCount;

/// An ordered set, stored as a binary search tree.
///
/// Every key in the left branch of a node is less than the node's key, and every key in the right
/// branch is greater. The tree isn't balanced, so inserting keys in order produces a tree as deep
/// as it is long and every operation degrades to `O(n)`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the BinaryTreeSet.
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `for_each_*` | `O(n)` |
pub struct BinaryTreeSet<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<T: Ord> BinaryTreeSet<T> {
    /// Creates a new, empty BinaryTreeSet.
    pub fn new() -> BinaryTreeSet<T> {
        BinaryTreeSet {
            root: Branch(None),
            len: 0,
            mods: ModCount::new(),
        }
    }

    /// Returns the number of keys in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set contains no keys.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key` into the set, returning true if it wasn't already present. An equal key that
    /// is already present is kept, and the tree isn't changed.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::binary_tree::BinaryTreeSet;
    /// let mut set = BinaryTreeSet::new();
    /// assert!(set.insert(5));
    /// assert!(!set.insert(5));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = self.root.insert(key);
        if inserted {
            self.len += 1;
            self.mods.bump();
        }
        inserted
    }

    /// Returns true if the set contains a key equal to `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.root.contains(key)
    }

    /// Removes the key equal to `key`, returning true if one was present.
    ///
    /// A node with two children isn't unlinked, instead its key is replaced by its in-order
    /// predecessor, the greatest key in its left branch, whose own node is removed.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::binary_tree::BinaryTreeSet;
    /// let mut set: BinaryTreeSet<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert!(set.remove(&5));
    /// assert_eq!(set.root(), Some(&4));
    /// assert!(!set.remove(&5));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        let removed = self.root.remove(key).is_some();
        if removed {
            self.len -= 1;
            self.mods.bump();
        }
        removed
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
        self.mods.bump();
    }

    /// Returns the key at the root of the tree.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// Returns the least key in the set.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the greatest key in the set.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Calls `f` with every key in ascending order.
    pub fn for_each_in_order<'a, F: FnMut(&'a T)>(&'a self, mut f: F) {
        self.root.for_each_in_order(&mut f);
    }

    /// Calls `f` with every key, visiting each node before either of its branches.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::binary_tree::BinaryTreeSet;
    /// let set: BinaryTreeSet<_> = [2, 1, 3].into_iter().collect();
    /// let mut keys = String::new();
    /// set.for_each_pre_order(|key| keys.push_str(&key.to_string()));
    /// assert_eq!(keys, "213");
    /// ```
    pub fn for_each_pre_order<'a, F: FnMut(&'a T)>(&'a self, mut f: F) {
        self.root.for_each_pre_order(&mut f);
    }

    /// Calls `f` with every key, visiting each node after both of its branches.
    pub fn for_each_post_order<'a, F: FnMut(&'a T)>(&'a self, mut f: F) {
        self.root.for_each_post_order(&mut f);
    }

    /// Creates a [`Vector`] holding clones of every key in ascending order.
    pub fn to_vector(&self) -> Vector<T>
    where
        T: Clone,
    {
        let mut keys = Vector::with_cap(self.len);
        self.for_each_in_order(|key| keys.push(key.clone()));
        keys
    }

    /// Returns an iterator over every key in ascending order. Nodes are visited lazily, using a
    /// stack of the ancestors still to be yielded.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a fail-fast [`Cursor`] positioned before the least key.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    /// Removes and returns the least key in the set.
    pub fn take_first(&mut self) -> Option<T> {
        let key = self.root.take_first()?;
        self.len -= 1;
        self.mods.bump();
        Some(key)
    }
}

impl<T: Ord> Default for BinaryTreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for BinaryTreeSet<T> {
    fn clone(&self) -> Self {
        // Inserting in pre-order rebuilds the same shape.
        let mut set = BinaryTreeSet::new();
        self.for_each_pre_order(|key| {
            set.insert(key.clone());
        });
        set
    }
}

impl<T: Ord> FromIterator<T> for BinaryTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BinaryTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BinaryTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> PartialEq for BinaryTreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for BinaryTreeSet<T> {}

impl<T: Ord + Debug> Debug for BinaryTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "BinaryTreeSet {{ len: {}, mods: {:?} }}", self.len, self.mods)?;
        write!(f, "{:?}", self.root)
    }
}

impl<T: Ord + Debug> Display for BinaryTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
