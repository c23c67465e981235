use super::Stack;
use crate::collections::contiguous::vector::{self, Iter};
use crate::util::error::ConcurrentModification;

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = vector::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

/// A fail-fast cursor over a [`Stack`], running from the bottom to the top. See
/// [`vector::Cursor`] for how modifications are detected.
#[derive(Debug)]
pub struct Cursor<T>(vector::Cursor<T>);

impl<T> Cursor<T> {
    pub(crate) fn new(stack: &Stack<T>) -> Cursor<T> {
        Cursor(stack.vec.cursor())
    }

    /// Returns true if there are more elements to yield.
    pub fn has_next(&self, stack: &Stack<T>) -> Result<bool, ConcurrentModification> {
        self.0.has_next(&stack.vec)
    }

    /// Yields the next element, or [`None`] once the top of the Stack has been passed.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(
        &mut self,
        stack: &'a Stack<T>,
    ) -> Result<Option<&'a T>, ConcurrentModification> {
        self.0.next(&stack.vec)
    }
}
