use std::fmt::{self, Debug, Formatter};
use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A distinct value stored in a [`Bag`](super::Bag), along with the number of times it is present.
/// An Entry is removed rather than being left with a count of zero.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Entry<T> {
    pub value: T,
    pub count: NonZero<usize>,
}

impl<T> Entry<T> {
    pub const fn new(value: T) -> Entry<T> {
        Entry {
            value,
            count: NonZero::<usize>::MIN,
        }
    }

    pub const fn count(&self) -> usize {
        self.count.get()
    }

    /// # Panics
    /// Panics if the count overflows [`usize`].
    pub fn increment(&mut self) {
        self.count = self.count.checked_add(1).ok_or(CapacityOverflow).throw();
    }

    /// Decrements the count, returning false instead if the count is 1 and the Entry should be
    /// removed.
    pub fn decrement(&mut self) -> bool {
        match NonZero::new(self.count.get() - 1) {
            Some(count) => {
                self.count = count;
                true
            },
            None => false,
        }
    }
}

impl<T: Debug> Debug for Entry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x{}", self.value, self.count)
    }
}
