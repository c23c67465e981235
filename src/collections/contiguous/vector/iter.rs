use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::slice;

use super::Vector;
use crate::collections::contiguous::Array;
#[doc(inline)]
pub use crate::collections::contiguous::array::IntoIter;
use crate::util::error::ConcurrentModification;
use crate::util::modification::Snapshot;
use crate::util::option::OptionExtension;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Array::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.arr[..self.len].iter())
    }
}

/// A borrowed iterator over the elements of a [`Vector`].
pub struct Iter<'a, T>(pub(crate) slice::Iter<'a, Option<T>>);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The inner iterator only covers the occupied slots below len.
        self.0.next().map(|slot| unsafe { slot.as_ref().unreachable() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: The inner iterator only covers the occupied slots below len.
        self.0.next_back().map(|slot| unsafe { slot.as_ref().unreachable() })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut(self.arr[..self.len].iter_mut())
    }
}

/// A borrowed iterator over mutable references to the elements of a [`Vector`].
pub struct IterMut<'a, T>(pub(crate) slice::IterMut<'a, Option<T>>);

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The inner iterator only covers the occupied slots below len.
        self.0.next().map(|slot| unsafe { slot.as_mut().unreachable() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: The inner iterator only covers the occupied slots below len.
        self.0.next_back().map(|slot| unsafe { slot.as_mut().unreachable() })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// A fail-fast cursor over a [`Vector`], see [`Vector::cursor`].
///
/// The cursor doesn't borrow the Vector between steps, instead it is handed the Vector on every
/// call. If the Vector has had elements added or removed since the cursor was created, every call
/// returns [`ConcurrentModification`].
///
/// # Examples
/// ```
/// # use scratch_collections::collections::contiguous::Vector;
/// let mut vec: Vector<_> = (0..3).collect();
/// let mut cursor = vec.cursor();
/// assert_eq!(cursor.next(&vec), Ok(Some(&0)));
///
/// vec.push(3);
/// assert!(cursor.next(&vec).is_err());
/// ```
#[derive(Debug)]
pub struct Cursor<T> {
    pub(crate) snapshot: Snapshot,
    pub(crate) index: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(vec: &Vector<T>) -> Cursor<T> {
        Cursor {
            snapshot: vec.mods.snapshot(),
            index: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns true if there are more elements to yield.
    pub fn has_next(&self, vec: &Vector<T>) -> Result<bool, ConcurrentModification> {
        self.snapshot.check(&vec.mods)?;
        Ok(self.index < vec.len)
    }

    /// Yields the next element, or [`None`] once all elements have been yielded.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(
        &mut self,
        vec: &'a Vector<T>,
    ) -> Result<Option<&'a T>, ConcurrentModification> {
        self.snapshot.check(&vec.mods)?;
        if self.index < vec.len {
            let value = vec.slot(self.index);
            self.index += 1;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }
}
