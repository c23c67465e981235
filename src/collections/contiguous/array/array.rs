use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::Vector;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// Every element of an Array is always initialized. Collections that need empty positions, such as
/// [`Vector`], store an `Array<Option<T>>` so that an empty slot is an explicit state rather than a
/// reserved value of `T`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc_with` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `size` elements, initializing each with the result of calling `f`
    /// with its index.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Array;
    /// let arr = Array::from_fn(4, |i| i * 10);
    /// assert_eq!(&*arr, &[0, 10, 20, 30]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, mut f: F) -> Array<T> {
        let ptr = Self::make_ptr(Self::make_layout(size));

        for i in 0..size {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array. If f panics, the
            // allocation and the values written so far are leaked, never read.
            unsafe { ptr.add(i).write(f(i)); }
        }

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reallocates self with `new_size`, dropping any elements past the new size and filling any
    /// extra elements with the result of calling `f`.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Array;
    /// let mut arr = Array::from_fn(3, |i| Some(i));
    /// arr.realloc_with(|| None, 5);
    /// assert_eq!(&*arr, &[Some(0), Some(1), Some(2), None, None]);
    /// arr.realloc_with(|| None, 2);
    /// assert_eq!(&*arr, &[Some(0), Some(1)]);
    /// ```
    pub fn realloc_with<F: FnMut() -> T>(&mut self, mut f: F, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let new_layout = Self::make_layout(new_size);
        let new_ptr = Self::make_ptr(new_layout);
        let kept = cmp::min(self.size, new_size);

        // Fill the new elements first, so that a panic in f leaves self untouched.
        for i in kept..new_size {
            // SAFETY: i is within the new allocation, which is valid for new_size elements.
            unsafe { new_ptr.add(i).write(f()); }
        }

        // SAFETY: Both allocations are valid for at least kept elements, properly aligned and
        // distinct, so they can't overlap. The moved values are never read from the old allocation
        // again.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr().cast_const(), new_ptr.as_ptr(), kept);
        }

        for i in kept..self.size {
            // SAFETY: Values past kept were not moved, are initialized and are dropped exactly
            // once here.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()); }
        }

        // SAFETY: The old pointer was allocated with the layout for self.size, which is
        // recalculated identically here.
        unsafe { Self::dealloc(self.ptr, self.size); }

        self.ptr = new_ptr;
        self.size = new_size;
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        match Layout::array::<T>(size) {
            Ok(layout) => layout,
            Err(_) => panic!("Capacity overflow!"),
        }
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// Deallocates the memory behind `ptr` without dropping anything.
    ///
    /// # Safety
    /// `ptr` must have been returned by [`Array::make_ptr`] for the layout of `size` elements, and
    /// must not be used afterwards.
    pub(crate) unsafe fn dealloc(ptr: NonNull<T>, size: usize) {
        let layout = Self::make_layout(size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout); }
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Array::from_fn(count, |_| T::default())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size elements are initialized and are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }
        // SAFETY: The pointer was created by make_ptr for self.size elements and the Array is
        // never used again.
        unsafe { Self::dealloc(self.ptr, self.size); }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_fn(self.size, |i| self[i].clone())
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vector<T>>().into()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
