//! Error types shared by the collections in this crate.
//!
//! Every failure kind is a small struct implementing [`Error`], so that functions which can only
//! fail in one way return exactly that type. Functions which can fail in more than one way return a
//! union enum, and [`CollectionError`] unions every kind for callers that would rather propagate a
//! single type with `?`.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the bounds of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A range whose bounds are individually valid but describe no elements, because `from > to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    /// The inclusive start of the range.
    pub from: usize,
    /// The inclusive end of the range.
    pub to: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range start {} is greater than range end {}!", self.from, self.to)
    }
}

impl Error for InvalidRange {}

/// A requested capacity doesn't fit in a [`usize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A collection was constructed with a capacity that it can't work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity {
    /// The capacity that was requested.
    pub cap: usize,
}

impl Display for InvalidCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid capacity {}, the collection needs room for at least one entry!",
            self.cap
        )
    }
}

impl Error for InvalidCapacity {}

/// An element was removed from a collection that had no elements. The message is provided by the
/// operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection(pub &'static str);

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for EmptyCollection {}

/// A unique insertion was attempted for a value that is already present. The message is provided by
/// the operation that failed, and usually points at the method that should have been used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateElement(pub &'static str);

impl Display for DuplicateElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for DuplicateElement {}

/// A value was expected to be present in a collection, but wasn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The requested value isn't present in the collection!")
    }
}

impl Error for NotFound {}

/// A cursor was used after the collection it was created from had been structurally modified, or
/// with a collection other than the one it was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentModification;

impl Display for ConcurrentModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection was modified while iterating!")
    }
}

impl Error for ConcurrentModification {}

/// The ways a range based operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum IndexOrRange {
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidRange(InvalidRange),
}

/// Every kind of failure raised by the collections in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidRange(InvalidRange),
    CapacityOverflow(CapacityOverflow),
    InvalidCapacity(InvalidCapacity),
    EmptyCollection(EmptyCollection),
    DuplicateElement(DuplicateElement),
    NotFound(NotFound),
    ConcurrentModification(ConcurrentModification),
}

impl From<IndexOrRange> for CollectionError {
    fn from(value: IndexOrRange) -> Self {
        match value {
            IndexOrRange::IndexOutOfBounds(e) => e.into(),
            IndexOrRange::InvalidRange(e) => e.into(),
        }
    }
}
