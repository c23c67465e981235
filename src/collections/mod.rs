//! Collection types, each written on top of this crate's own [`Array`](contiguous::Array) rather
//! than [`Vec`] or anything from [`std::collections`].
//!
//! # Fail-fast cursors
//! Borrowing iterators are protected by the borrow checker, but every collection also hands out a
//! detached `Cursor` which doesn't hold a borrow between steps. Each step is given the collection
//! again and checks it against a snapshot of the collection's modification count, so adding or
//! removing elements part way through iteration is reported as a
//! [`ConcurrentModification`](crate::error::ConcurrentModification) rather than yielding stale
//! elements.

#[cfg(feature = "bag")]
pub mod bag;
#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
