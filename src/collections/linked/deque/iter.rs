use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Deque, DequeContents, DequeState, Link};
use crate::util::error::ConcurrentModification;
use crate::util::modification::Snapshot;

use DequeState::*;

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

/// An owned iterator over the elements of a [`Deque`], from the front to the back.
pub struct IntoIter<T> {
    // Holding the Deque means that dropping the iterator frees any remaining nodes.
    pub(crate) deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.state.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.state.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over the elements of a [`Deque`], from the front to the back.
pub struct Iter<'a, T> {
    // The same fields as the Deque itself, but the nodes are never modified. The length tracks the
    // number of items left to yield.
    pub(crate) state: DequeState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(DequeContents { len, head, .. }) => {
                let value = head.value();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { head.next().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(DequeContents { len, tail, .. }) => {
                let value = tail.value();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        *tail = unsafe { tail.prev().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

/// A fail-fast cursor over a [`Deque`], running from the front to the back.
///
/// The cursor only follows its node pointer after checking that the Deque it was handed is the
/// one it was created from and that nothing has been enqueued or dequeued since.
///
/// # Examples
/// ```
/// # use scratch_collections::collections::linked::Deque;
/// let mut deque: Deque<_> = ["a", "b"].into_iter().collect();
/// let mut cursor = deque.cursor();
/// assert_eq!(cursor.next(&deque), Ok(Some(&"a")));
///
/// deque.enqueue_first("z");
/// assert!(cursor.next(&deque).is_err());
/// ```
#[derive(Debug)]
pub struct Cursor<T> {
    pub(crate) snapshot: Snapshot,
    pub(crate) next: Link<T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(deque: &Deque<T>) -> Cursor<T> {
        Cursor {
            snapshot: deque.mods.snapshot(),
            next: match deque.state {
                Empty => None,
                Full(DequeContents { head, .. }) => Some(head),
            },
        }
    }

    /// Returns true if there are more elements to yield.
    pub fn has_next(&self, deque: &Deque<T>) -> Result<bool, ConcurrentModification> {
        self.snapshot.check(&deque.mods)?;
        Ok(self.next.is_some())
    }

    /// Yields the next element, or [`None`] once the back of the Deque has been passed.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(
        &mut self,
        deque: &'a Deque<T>,
    ) -> Result<Option<&'a T>, ConcurrentModification> {
        self.snapshot.check(&deque.mods)?;

        match self.next {
            Some(node) => {
                // The check above means node is still linked into deque.
                self.next = *node.next();
                Ok(Some(node.value()))
            },
            None => Ok(None),
        }
    }
}
