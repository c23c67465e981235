use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Cursor, Iter, Length, Node, NodeRef, ONE};
use crate::collections::contiguous::Vector;
use crate::util::error::{CapacityOverflow, EmptyCollection};
use crate::util::fmt::DebugIter;
use crate::util::modification::ModCount;
use crate::util::result::ResultExtension;

/// A double-ended queue, built from nodes with links in both directions.
///
/// The front of the Deque is where [`Deque::dequeue_first`] removes from, so values enqueued with
/// [`Deque::enqueue_last`] leave in first-in-first-out order. Iteration runs in the same order,
/// from the front to the back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
/// - `m`: The number of items being enqueued.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `enqueue_first/last` | `O(1)` |
/// | `enqueue_all_first/last` | `O(m)` |
/// | `dequeue_first/last` | `O(1)` |
/// | `dequeue_all` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct Deque<T> {
    pub(crate) state: DequeState<T>,
    pub(crate) mods: ModCount,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum DequeState<T> {
    Empty,
    Full(DequeContents<T>),
}

use DequeState::*;

pub(crate) struct DequeContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::linked::Deque;
    /// let deque: Deque<u8> = Deque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.front(), None);
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            state: Empty,
            mods: ModCount::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the Deque.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the Deque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the element at the front of the Deque, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(DequeContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the element at the back of the Deque, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(DequeContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the front of the Deque.
    ///
    /// # Panics
    /// Panics if the length of the Deque overflows [`usize`].
    pub fn enqueue_first(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = DequeState::single(value),
            Full(contents) => contents.push_front(value),
        }
        self.mods.bump();
    }

    /// Adds the provided element to the back of the Deque.
    ///
    /// # Panics
    /// Panics if the length of the Deque overflows [`usize`].
    pub fn enqueue_last(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = DequeState::single(value),
            Full(contents) => contents.push_back(value),
        }
        self.mods.bump();
    }

    /// Adds every item produced by `iter` to the front of the Deque, one at a time. Each item is
    /// placed in front of the previous one, so the items end up in reverse order.
    ///
    /// # Panics
    /// Panics if the length of the Deque overflows [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::linked::Deque;
    /// let mut deque: Deque<_> = [10].into_iter().collect();
    /// deque.enqueue_all_first([1, 2, 3]);
    /// assert!(deque.iter().eq(&[3, 2, 1, 10]));
    /// ```
    pub fn enqueue_all_first<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue_first(item);
        }
    }

    /// Adds every item produced by `iter` to the back of the Deque, keeping their order.
    ///
    /// # Panics
    /// Panics if the length of the Deque overflows [`usize`].
    pub fn enqueue_all_last<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue_last(item);
        }
    }

    /// Removes and returns the element at the front of the Deque.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Deque has no elements.
    pub fn dequeue_first(&mut self) -> Result<T, EmptyCollection> {
        let value = self.state
            .pop_front()
            .ok_or(EmptyCollection("Cannot dequeue from an empty Deque!"))?;
        self.mods.bump();
        Ok(value)
    }

    /// Removes and returns the element at the back of the Deque.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Deque has no elements.
    pub fn dequeue_last(&mut self) -> Result<T, EmptyCollection> {
        let value = self.state
            .pop_back()
            .ok_or(EmptyCollection("Cannot dequeue from an empty Deque!"))?;
        self.mods.bump();
        Ok(value)
    }

    /// Removes every element, returning them in a [`Vector`] that starts with the back of the Deque
    /// and ends with the front. For a Deque filled with [`Deque::enqueue_last`], this is the
    /// reverse of the order they were added in.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Deque has no elements.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::linked::Deque;
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut deque: Deque<_> = (1..=4).collect();
    /// assert_eq!(deque.dequeue_all(), Ok([4, 3, 2, 1].into_iter().collect::<Vector<_>>()));
    /// assert!(deque.is_empty());
    /// ```
    pub fn dequeue_all(&mut self) -> Result<Vector<T>, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection("Cannot dequeue from an empty Deque!"));
        }

        let mut values = Vector::with_cap(self.len());
        while let Some(value) = self.state.pop_back() {
            values.push(value);
        }
        self.mods.bump();
        Ok(values)
    }

    /// Removes and drops every element.
    pub fn clear(&mut self) {
        self.state.clear();
        self.mods.bump();
    }

    /// Returns an iterator over references to every element, from the front to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a fail-fast [`Cursor`] positioned before the front element.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(DequeContents { len, head, tail }) => {
                assert!(head.prev().is_none());
                let mut curr = head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T> DequeState<T> {
    pub fn single(value: T) -> DequeState<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        Full(DequeContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(DequeContents { len, .. }) => len.get(),
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        match self {
            Empty => None,
            Full(DequeContents { len, head, .. }) => {
                // SAFETY: The head is unlinked below and never used again.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node.value)
            },
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        match self {
            Empty => None,
            Full(DequeContents { len, tail, .. }) => {
                // SAFETY: The tail is unlinked below and never used again.
                let node = unsafe { tail.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Frees every node, leaving the state empty.
    pub fn clear(&mut self) {
        if let Full(DequeContents { head, .. }) = mem::replace(self, Empty) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: The whole chain was detached from self above and each node is visited
                // exactly once.
                drop(unsafe { ptr.take_node() });
            }
        }
    }
}

impl<T> DequeContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }
}

impl<T> Clone for DequeContents<T> {
    fn clone(&self) -> Self {
        DequeContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

// Only clones the pointers, for use by borrowed iterators.
impl<T> Clone for DequeState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.state.clear();
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.enqueue_all_last(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all_last(iter);
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .field("mods", &self.mods)
            .finish()
    }
}

impl<T: Debug> Display for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
