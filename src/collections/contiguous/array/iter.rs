use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let result = IntoIter {
            alloc: self.ptr,
            size: self.size,
            start: 0,
            end: self.size,
            _phantom: PhantomData,
        };
        mem::forget(self);
        result
    }
}

/// An owned type for owned iteration over an [`Array`]. See [`Array::into_iter`].
pub struct IntoIter<T> {
    pub(crate) alloc: NonNull<T>,
    pub(crate) size: usize,
    // Values in start..end haven't been yielded yet.
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only values in start..end are still initialized and owned by the iterator, they
        // are dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.alloc.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }
        // SAFETY: The allocation was made by the Array this iterator was created from, for size
        // elements, and isn't used again.
        unsafe { Array::dealloc(self.alloc, self.size); }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the allocation and the value there hasn't been yielded yet.
            // Incrementing start afterwards effectively moves the value off of the heap.
            let value = unsafe { self.alloc.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is within the allocation and the value there
            // hasn't been yielded yet.
            let value = unsafe { self.alloc.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// Borrowed iteration just uses the slice iterators provided by Deref<Target = [T]>.
impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
