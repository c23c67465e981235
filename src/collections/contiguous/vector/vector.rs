use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{Cursor, Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::util::error::{
    CapacityOverflow, EmptyCollection, IndexOrRange, IndexOutOfBounds, InvalidRange,
};
use crate::util::fmt::DebugIter;
use crate::util::modification::ModCount;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The number of slots allocated by [`Vector::new`].
pub const DEFAULT_CAP: usize = 100;

/// A variable size contiguous collection, based on an [`Array`] of optional slots.
///
/// All elements occupy the slots `0..len`, every slot from `len` to the capacity is empty. Growth
/// happens when an insertion would exceed the capacity, to `(cap + 1) * 2` slots, which grows even
/// a Vector with no capacity. Removing elements trims the capacity down to the length again.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added or compared against.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n)` |
/// | `remove_item` | `O(n)` |
/// | `replace` | `O(1)` |
/// | `insert_all` | `O(n+m)` |
/// | `sub_list` | `O(m)` |
/// | `retain_all` | `O(n*m)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Vector<T> {
    pub(crate) arr: Array<Option<T>>,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 100);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(DEFAULT_CAP)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::from_fn(cap, |_| None),
            len: 0,
            mods: ModCount::new(),
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is always exactly the value that
    /// the growth policy or one of the capacity manipulation functions last set.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let vec: Vector<_> = "abc".chars().collect();
    /// assert_eq!(vec.get(1), &'b');
    /// ```
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.slot(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.slot_mut(index))
    }

    /// Returns a reference to the first element, or [`None`] if the Vector is empty.
    pub fn first(&self) -> Option<&T> {
        self.try_get(0).ok()
    }

    /// Returns a reference to the last element, or [`None`] if the Vector is empty.
    pub fn last(&self) -> Option<&T> {
        self.try_get(self.len.checked_sub(1)?).ok()
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value or an
    /// [`Err`] if the index is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(std::mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::with_cap(0);
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(vec, [0, 1, 2, 3, 4, 5].into_iter().collect());
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = Some(value);
        self.len += 1;
        self.mods.bump();
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Unlike the other removal methods, the capacity is kept.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let value = self.arr[last].take();
        self.len = last;
        self.mods.bump();
        value
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// index equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(vec, [0, 200, 100, 300, 1, 2, 400].into_iter().collect());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking if
    /// the index is greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        self.check_insert_index(index)?;

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = Some(value);
        for i in index..=self.len {
            prev = std::mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        self.mods.bump();
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap
    /// and trimming the capacity to the new length.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// assert_eq!(vec.cap(), vec.len());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking if the
    /// index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let value = self.shift_out(index);
        self.shrink_to_fit();
        Ok(value)
    }

    /// Removes the first element equal to `value`, compacting the following elements and trimming
    /// the capacity. Returns whether an element was removed.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector has no elements to remove.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = [1, 2, 1].into_iter().collect();
    /// assert_eq!(vec.remove_item(&1), Ok(true));
    /// assert_eq!(vec.remove_item(&5), Ok(false));
    /// assert_eq!(vec, [2, 1].into_iter().collect());
    /// ```
    pub fn remove_item(&mut self, value: &T) -> Result<bool, EmptyCollection>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(EmptyCollection("Cannot remove an element from an empty Vector!"));
        }

        match self.index_of(value) {
            Some(index) => {
                self.shift_out(index);
                self.shrink_to_fit();
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == value)
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.arr.iter_mut().take(self.len) {
            *slot = None;
        }
        self.len = 0;
        self.mods.bump();
    }

    /// Appends every item produced by `iter`, in order. The same as [`Extend::extend`].
    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }

    /// Inserts every item produced by `iter` starting at `index`, keeping their order. Elements
    /// previously at or after `index` follow the inserted block.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = [0, 1, 5].into_iter().collect();
    /// vec.insert_all(2, 2..5);
    /// assert_eq!(vec, (0..6).collect());
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) {
        self.try_insert_all(index, iter).throw()
    }

    /// Inserts every item produced by `iter` starting at `index`, returning an [`Err`] rather than
    /// panicking if the index is greater than the length. Nothing is inserted on an error.
    pub fn try_insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<(), IndexOutOfBounds> {
        self.check_insert_index(index)?;

        // Collect first, so that a panicking iterator can't leave a gap in self.
        let block: Vector<T> = iter.into_iter().collect();
        let count = block.len;
        if count == 0 {
            return Ok(());
        }

        self.reserve(count);

        for i in (index..self.len).rev() {
            self.arr[i + count] = self.arr[i].take();
        }
        for (offset, item) in block.into_iter().enumerate() {
            self.arr[index + offset] = Some(item);
        }

        self.len += count;
        self.mods.bump();
        Ok(())
    }

    /// Creates a new, independent Vector containing clones of the elements from `from` up to and
    /// including `to`. A `to` equal to the length is accepted and covers the remaining elements.
    ///
    /// # Errors
    /// Returns [`InvalidRange`] if `from > to` and [`IndexOutOfBounds`] if `to > len`.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let vec: Vector<_> = (0..6).collect();
    /// assert_eq!(vec.sub_list(1, 3), Ok((1..=3).collect()));
    /// assert_eq!(vec.sub_list(4, 6), Ok((4..6).collect()));
    /// assert!(vec.sub_list(3, 1).unwrap_err().is_invalid_range());
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Vector<T>, IndexOrRange>
    where
        T: Clone,
    {
        if from > to {
            return Err(InvalidRange { from, to }.into());
        }
        if to > self.len {
            return Err(IndexOutOfBounds { index: to, len: self.len }.into());
        }

        let end = cmp::min(to + 1, self.len);
        let mut sub = Vector::with_cap(end - from);
        for i in from..end {
            sub.push(self.slot(i).clone());
        }
        Ok(sub)
    }

    /// Keeps only the elements that are also present in `other`, returning whether anything was
    /// removed.
    pub fn retain_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|item| other.contains(item))
    }

    /// Removes every element that is present in `other`, returning whether anything was removed.
    pub fn remove_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|item| !other.contains(item))
    }

    /// Returns true if every element of `other` is present in self.
    pub fn contains_all(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        other.iter().all(|item| self.contains(item))
    }

    /// Creates an [`Array`] holding clones of every element, sized exactly to the length.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        Array::from_fn(self.len, |i| self.slot(i).clone())
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or the memory layout of the Vector would have a size
    /// that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() {
            return;
        }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Adjusts the capacity of the Vector to `new_cap`, dropping elements if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn adjust_cap(&mut self, new_cap: usize) {
        if new_cap < self.len {
            self.len = new_cap;
            self.mods.bump();
        }

        self.realloc_with_cap(new_cap);
    }

    /// Returns an iterator over references to every element, in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to every element, in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Creates a fail-fast [`Cursor`] positioned before the first element.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    /// Keeps the elements for which `keep` returns true, compacting them to the front of the
    /// Vector in their original order. Trims the capacity and returns true if any were removed.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) -> bool {
        // Treat the Vector as empty while keep runs, so a panic can't expose an empty slot below
        // len. Any values left in the slots are still dropped with the Array.
        let len = std::mem::replace(&mut self.len, 0);
        let mut kept = 0;
        for i in 0..len {
            let value = self.arr[i].take();
            if value.as_ref().is_some_and(&mut keep) {
                self.arr[kept] = value;
                kept += 1;
            }
        }

        let changed = kept != len;
        self.len = kept;
        if changed {
            self.mods.bump();
            self.shrink_to_fit();
        }
        changed
    }

    /// Removes and returns the element at `index`, shifting all following elements down by one.
    /// Unlike [`Vector::remove`], the capacity is kept.
    ///
    /// The caller must have checked that `index < len`.
    pub(crate) fn shift_out(&mut self, index: usize) -> T {
        let mut next = None;
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = std::mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        self.mods.bump();
        // SAFETY: next contains the value which was previously located at index, which the caller
        // has checked to be less than len and therefore occupied.
        unsafe { next.unreachable() }
    }

    /// Returns the element in the occupied slot at `index`.
    ///
    /// The caller must have checked that `index < len`.
    pub(crate) fn slot(&self, index: usize) -> &T {
        // SAFETY: All slots below len are occupied.
        unsafe { self.arr[index].as_ref().unreachable() }
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: All slots below len are occupied.
        unsafe { self.arr[index].as_mut().unreachable() }
    }

    /// Reallocates the internal Array with the provided capacity, any new slots are empty.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.arr.realloc_with(|| None, new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`] or the memory layout of the Vector would have
    /// a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_add(1)
            .and_then(|cap| cap.checked_mul(2))
            .ok_or(CapacityOverflow)
            .throw();

        self.realloc_with_cap(new_cap);
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) const fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.extend_from(iter);
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // SAFETY: All slots below len are occupied, and each is taken exactly once.
        Array::from_fn(value.len, |i| unsafe { value.arr[i].take().unreachable() })
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        let mut items = value.into_iter();
        Vector {
            arr: Array::from_fn(len, |_| items.next()),
            len,
            mods: ModCount::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("mods", &self.mods)
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
