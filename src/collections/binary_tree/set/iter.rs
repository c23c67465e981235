use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{BinaryTreeSet, Branch, Node};
use crate::collections::contiguous::Vector;
use crate::util::error::ConcurrentModification;
use crate::util::modification::Snapshot;

impl<T: Ord> IntoIterator for BinaryTreeSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}

/// An owned iterator over the keys of a [`BinaryTreeSet`], in ascending order.
pub struct IntoIter<T: Ord> {
    pub(crate) set: BinaryTreeSet<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.set.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.set.len()
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinaryTreeSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vector::with_cap(0),
            remaining: self.len,
        };
        iter.push_left_spine(&self.root);
        iter
    }
}

/// A borrowed iterator over the keys of a [`BinaryTreeSet`], in ascending order.
pub struct Iter<'a, T: Ord> {
    // Nodes whose left branch has been (or is about to be) yielded, but which haven't been yielded
    // themselves. The top of the stack is always the next key.
    pub(crate) stack: Vector<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    fn push_left_spine(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = &branch.0 {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<T: Ord> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

/// A fail-fast cursor over a [`BinaryTreeSet`], yielding keys in ascending order.
///
/// Like [`Iter`], the cursor keeps a stack of the ancestors it has yet to yield, but holds them as
/// raw pointers so that the set isn't borrowed between steps. Any insertion or removal since the
/// cursor was created makes every further call fail, before any pointer is followed.
///
/// # Examples
/// ```
/// # use scratch_collections::collections::binary_tree::BinaryTreeSet;
/// let mut set: BinaryTreeSet<_> = [2, 1, 3].into_iter().collect();
/// let mut cursor = set.cursor();
/// assert_eq!(cursor.next(&set), Ok(Some(&1)));
///
/// set.insert(0);
/// assert!(cursor.next(&set).is_err());
/// ```
#[derive(Debug)]
pub struct Cursor<T: Ord> {
    pub(crate) snapshot: Snapshot,
    pub(crate) stack: Vector<NonNull<Node<T>>>,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T: Ord> Cursor<T> {
    pub(crate) fn new(set: &BinaryTreeSet<T>) -> Cursor<T> {
        let mut cursor = Cursor {
            snapshot: set.mods.snapshot(),
            stack: Vector::with_cap(0),
            _phantom: PhantomData,
        };
        cursor.push_left_spine(&set.root);
        cursor
    }

    fn push_left_spine(&mut self, mut branch: &Branch<T>) {
        while let Some(node) = &branch.0 {
            self.stack.push(NonNull::from(&**node));
            branch = &node.left;
        }
    }

    /// Returns true if there are more keys to yield.
    pub fn has_next(&self, set: &BinaryTreeSet<T>) -> Result<bool, ConcurrentModification> {
        self.snapshot.check(&set.mods)?;
        Ok(!self.stack.is_empty())
    }

    /// Yields the next key, or [`None`] once the greatest key has been passed.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(
        &mut self,
        set: &'a BinaryTreeSet<T>,
    ) -> Result<Option<&'a T>, ConcurrentModification> {
        self.snapshot.check(&set.mods)?;

        match self.stack.pop() {
            Some(ptr) => {
                // SAFETY: The check above means set hasn't had a node added or removed since this
                // cursor was created, so every pointer on the stack still points to a node owned
                // by set, which is borrowed for 'a.
                let node: &'a Node<T> = unsafe { ptr.as_ref() };
                self.push_left_spine(&node.right);
                Ok(Some(&node.key))
            },
            None => Ok(None),
        }
    }
}
