//! Structural modification tracking, used to make cursors fail fast.
//!
//! Each collection owns a [`ModCount`] and bumps it whenever elements are added or removed,
//! reallocating without changing the elements doesn't count. A cursor takes a [`Snapshot`] when it
//! is created and checks it against the collection before every step. This only detects mutation
//! between steps on the same thread, it doesn't make anything safe to share between threads.

use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::ptr;
use std::rc::{Rc, Weak};

use crate::util::error::ConcurrentModification;

pub(crate) struct ModCount(Rc<Cell<usize>>);

impl ModCount {
    pub fn new() -> ModCount {
        ModCount(Rc::new(Cell::new(0)))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn bump(&mut self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            owner: Rc::downgrade(&self.0),
            expected: self.get(),
        }
    }
}

impl Default for ModCount {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ModCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The state of a [`ModCount`] at the time a cursor was created.
///
/// Holding a [`Weak`] to the counter keeps its allocation alive, so no other collection can ever
/// end up with a counter at the same address while the snapshot exists. A matching address and
/// count therefore means the cursor is being used with the same, unmodified collection.
pub(crate) struct Snapshot {
    owner: Weak<Cell<usize>>,
    expected: usize,
}

impl Snapshot {
    pub fn check(&self, mods: &ModCount) -> Result<(), ConcurrentModification> {
        if ptr::eq(self.owner.as_ptr(), Rc::as_ptr(&mods.0)) && self.expected == mods.get() {
            Ok(())
        } else {
            Err(ConcurrentModification)
        }
    }
}

impl Debug for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expected)
    }
}
