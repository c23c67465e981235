use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::Cursor;
use crate::collections::contiguous::Array;
use crate::collections::contiguous::vector::{Iter, Vector};
use crate::util::error::EmptyCollection;
use crate::util::fmt::DebugIter;
use crate::util::modification::ModCount;

/// A last-in-first-out collection, backed by a [`Vector`]. The top of the Stack is the end of the
/// Vector, so that every operation other than [`Stack::pop_all`] works on the last element only.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
/// - `m`: The number of items being pushed.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_all` | `O(m)`*, `O(n+m)` |
/// | `pop` | `O(1)` |
/// | `pop_all` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* If the backing Vector doesn't have enough capacity, pushing will take `O(n)`.
pub struct Stack<T> {
    pub(crate) vec: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack. The backing [`Vector`] starts with its default capacity.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Stack;
    /// let stack: Stack<u8> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    pub fn new() -> Stack<T> {
        Stack { vec: Vector::new() }
    }

    /// Creates a new, empty Stack with room for `cap` elements before reallocating.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack { vec: Vector::with_cap(cap) }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the Stack has no elements.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the memory layout of the backing Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.vec.push(value);
    }

    /// Pushes every item produced by `iter` in order, so that the last item ends up on top.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Stack;
    /// let mut stack = Stack::new();
    /// stack.push_all([1, 2, 3]);
    /// assert_eq!(stack.peek(), Some(&3));
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend_from(iter);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack has no elements.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.vec.pop().ok_or(EmptyCollection("Cannot pop from an empty Stack!"))
    }

    /// Removes every element, returning them as a [`Vector`] ordered from the bottom of the Stack
    /// to the top. The Stack keeps no capacity afterwards.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack has no elements.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::{Stack, Vector};
    /// let mut stack = Stack::new();
    /// stack.push_all(["a", "b", "c"]);
    /// assert_eq!(stack.pop_all(), Ok(["a", "b", "c"].into_iter().collect::<Vector<_>>()));
    /// assert!(stack.pop_all().is_err());
    /// ```
    pub fn pop_all(&mut self) -> Result<Vector<T>, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection("Cannot pop from an empty Stack!"));
        }

        // Hand the whole allocation over rather than moving each element.
        let popped = Vector {
            arr: mem::replace(&mut self.vec.arr, Array::new()),
            len: mem::replace(&mut self.vec.len, 0),
            mods: ModCount::new(),
        };
        self.vec.mods.bump();
        Ok(popped)
    }

    /// Returns a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.vec.last()
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Returns an iterator over references to every element, from the bottom of the Stack to the
    /// top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.vec.iter()
    }

    /// Creates a fail-fast [`Cursor`] positioned before the bottom element.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack { vec: self.vec.clone() }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack { vec: iter.into_iter().collect() }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .field("mods", &self.vec.mods)
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
