use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Bag, Categorized, Entry};
use crate::collections::contiguous::vector;
use crate::util::error::ConcurrentModification;
use crate::util::modification::Snapshot;

impl<'a, T: Eq + Categorized> IntoIterator for &'a Bag<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            entries: self.entries.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over a [`Bag`], yielding each value once for every copy present.
pub struct Iter<'a, T> {
    pub(crate) entries: vector::Iter<'a, Entry<T>>,
    pub(crate) current: Option<(&'a T, usize)>,
    pub(crate) remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            entries: self.entries.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((value, copies)) = &mut self.current
                && *copies > 0
            {
                *copies -= 1;
                self.remaining -= 1;
                return Some(*value);
            }

            let entry = self.entries.next()?;
            self.current = Some((&entry.value, entry.count()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A fail-fast cursor over a [`Bag`], see [`Bag::cursor`].
///
/// Any change to the Bag's contents after the cursor is created, including adding another copy of a
/// value, causes every following call to return [`ConcurrentModification`].
///
/// # Examples
/// ```
/// # use scratch_collections::collections::bag::{Bag, Marble, Material};
/// let marble = Marble::new("black", Material::Steel);
/// let mut bag = Bag::new();
/// bag.add_unique(marble.clone()).unwrap();
///
/// let mut cursor = bag.cursor();
/// assert_eq!(cursor.next(&bag), Ok(Some(&marble)));
/// bag.add_duplicate(&marble).unwrap();
/// assert!(cursor.has_next(&bag).is_err());
/// ```
#[derive(Debug)]
pub struct Cursor<T> {
    pub(crate) snapshot: Snapshot,
    pub(crate) entry: usize,
    pub(crate) copy: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T: Eq + Categorized> Cursor<T> {
    pub(crate) fn new(bag: &Bag<T>) -> Cursor<T> {
        Cursor {
            snapshot: bag.mods.snapshot(),
            entry: 0,
            copy: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns true if there are more values to yield.
    pub fn has_next(&self, bag: &Bag<T>) -> Result<bool, ConcurrentModification> {
        self.snapshot.check(&bag.mods)?;
        Ok(self.entry < bag.entries.len())
    }

    /// Yields the next value, or [`None`] once every copy of every value has been yielded.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(&mut self, bag: &'a Bag<T>) -> Result<Option<&'a T>, ConcurrentModification> {
        self.snapshot.check(&bag.mods)?;

        let Ok(entry) = bag.entries.try_get(self.entry) else {
            return Ok(None);
        };

        self.copy += 1;
        if self.copy == entry.count() {
            self.entry += 1;
            self.copy = 0;
        }
        Ok(Some(&entry.value))
    }
}
