use std::fmt::{self, Debug, Display, Formatter};

use super::{Categorized, Cursor, Entry, Iter};
use crate::collections::contiguous::Vector;
use crate::util::error::{CapacityOverflow, DuplicateElement, InvalidCapacity, NotFound};
use crate::util::fmt::DebugIter;
use crate::util::modification::ModCount;
use crate::util::result::ResultExtension;

/// The number of entries allocated by [`Bag::new`] and restored by [`Bag::clear_all`].
pub const DEFAULT_CAP: usize = 10;

/// A multiset, storing each distinct value once along with the number of times it is present.
///
/// Entries are kept in the order their values were first added. Iterating over a Bag yields each
/// value as many times as it is present, keeping all copies of a value together:
///
/// ```
/// # use scratch_collections::collections::bag::{Bag, Marble, Material};
/// let red = Marble::new("red", Material::Glass);
/// let blue = Marble::new("blue", Material::Steel);
///
/// let mut bag = Bag::new();
/// bag.add_unique(red.clone()).unwrap();
/// bag.add_unique(blue.clone()).unwrap();
/// bag.add_duplicate(&red).unwrap();
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.distinct_len(), 2);
/// assert!(bag.iter().eq([&red, &red, &blue]));
/// ```
///
/// Capacity is measured in entries rather than values. When a new distinct value doesn't fit, the
/// capacity is doubled.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of distinct values in the Bag.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `has_value` | `O(n)` |
/// | `add_unique` | `O(n)` |
/// | `add_duplicate` | `O(n)` |
/// | `remove_one` | `O(n)` |
/// | `count_by_category` | `O(n)` |
/// | `clear_category` | `O(n)` |
pub struct Bag<T: Eq + Categorized> {
    pub(crate) entries: Vector<Entry<T>>,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<T: Eq + Categorized> Bag<T> {
    /// Creates a new, empty Bag with room for [`DEFAULT_CAP`] distinct values.
    pub fn new() -> Bag<T> {
        Bag {
            entries: Vector::with_cap(DEFAULT_CAP),
            len: 0,
            mods: ModCount::new(),
        }
    }

    /// Creates a new, empty Bag with room for `cap` distinct values.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn with_cap(cap: usize) -> Bag<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new, empty Bag with room for `cap` distinct values, returning an [`Err`] rather
    /// than panicking if `cap` is 0.
    pub fn try_with_cap(cap: usize) -> Result<Bag<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }

        Ok(Bag {
            entries: Vector::with_cap(cap),
            len: 0,
            mods: ModCount::new(),
        })
    }

    /// Returns the total number of values in the Bag, counting every copy.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct values in the Bag.
    pub const fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the Bag contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct values the Bag can hold before reallocating.
    pub const fn cap(&self) -> usize {
        self.entries.cap()
    }

    /// Returns true if the Bag contains at least one copy of `value`.
    pub fn has_value(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the number of copies of `value` in the Bag.
    pub fn count_of(&self, value: &T) -> usize {
        self.find(value).map_or(0, |index| self.entries[index].count())
    }

    /// Adds `value` to the Bag as a new distinct value, doubling the capacity if it is full. The
    /// Bag takes ownership of the value, so the caller can't modify it afterwards.
    ///
    /// # Errors
    /// Returns [`DuplicateElement`] if `value` is already present, in which case
    /// [`Bag::add_duplicate`] should be used instead.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`] or the memory layout of the Bag would have a
    /// size that exceeds [`isize::MAX`].
    pub fn add_unique(&mut self, value: T) -> Result<(), DuplicateElement> {
        if self.has_value(&value) {
            return Err(DuplicateElement(
                "The value is already in the Bag, add_duplicate should be used instead!"
            ));
        }

        if self.entries.len() == self.entries.cap() {
            // A trimmed, empty Bag has no capacity to double.
            let new_cap = self.cap().checked_mul(2).ok_or(CapacityOverflow).throw().max(1);
            self.entries.adjust_cap(new_cap);
        }

        self.entries.push(Entry::new(value));
        self.len += 1;
        self.mods.bump();
        Ok(())
    }

    /// Adds another copy of `value`, which must already be present.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the Bag doesn't contain `value`, in which case [`Bag::add_unique`]
    /// should be used instead.
    ///
    /// # Panics
    /// Panics if the number of copies of `value` overflows [`usize`].
    pub fn add_duplicate(&mut self, value: &T) -> Result<(), NotFound> {
        let index = self.find(value).ok_or(NotFound)?;

        self.entries[index].increment();
        self.len += 1;
        self.mods.bump();
        Ok(())
    }

    /// Removes one copy of `value`. When the last copy is removed, the entry for `value` is removed
    /// and the following entries are moved down to fill its place. The capacity is kept.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the Bag doesn't contain `value`.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::bag::{Bag, Marble, Material};
    /// let marble = Marble::new("green", Material::Clay);
    /// let mut bag = Bag::new();
    /// bag.add_unique(marble.clone()).unwrap();
    /// bag.add_duplicate(&marble).unwrap();
    ///
    /// bag.remove_one(&marble).unwrap();
    /// assert_eq!(bag.count_of(&marble), 1);
    /// bag.remove_one(&marble).unwrap();
    /// assert!(!bag.has_value(&marble));
    /// assert!(bag.remove_one(&marble).is_err());
    /// ```
    pub fn remove_one(&mut self, value: &T) -> Result<(), NotFound> {
        let index = self.find(value).ok_or(NotFound)?;

        if !self.entries[index].decrement() {
            self.entries.shift_out(index);
        }
        self.len -= 1;
        self.mods.bump();
        Ok(())
    }

    /// Returns the number of distinct values (not copies) whose category is equal to `category`.
    pub fn count_by_category(&self, category: &T::Category) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value.category() == category)
            .count()
    }

    /// Removes every value, and resets the capacity to [`DEFAULT_CAP`].
    pub fn clear_all(&mut self) {
        self.entries = Vector::with_cap(DEFAULT_CAP);
        self.len = 0;
        self.mods.bump();
    }

    /// Removes every copy of every value whose category is equal to `category`. The remaining
    /// entries keep their order and the capacity is kept.
    pub fn clear_category(&mut self, category: &T::Category) {
        let cap = self.cap();
        self.entries.retain(|entry| entry.value.category() != category);
        self.entries.adjust_cap(cap);

        self.len = self.entries.iter().map(Entry::count).sum();
        self.mods.bump();
    }

    /// Shrinks the capacity to exactly the number of distinct values.
    pub fn trim_to_size(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns an iterator over every value in the Bag, yielding each value once per copy.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a fail-fast [`Cursor`] positioned before the first value.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    pub(crate) fn find(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|entry| entry.value == *value)
    }
}

impl<T: Eq + Categorized> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Categorized + Clone> Clone for Bag<T> {
    fn clone(&self) -> Self {
        Bag {
            entries: self.entries.clone(),
            len: self.len,
            mods: ModCount::new(),
        }
    }
}

impl<T: Eq + Categorized + Debug> Debug for Bag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bag")
            .field("entries", &DebugIter(self.entries.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("mods", &self.mods)
            .finish()
    }
}

impl<T: Eq + Categorized + Debug> Display for Bag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
