//! A multiset collection, [`Bag`], which stores every distinct value once alongside the number of
//! times it has been added.
//!
//! Values are grouped into categories through the [`Categorized`] trait, so that a Bag can count or
//! clear every entry of one category at once. [`Marble`] is the canonical element type, with its
//! [`Material`] as its category.
#![warn(missing_docs)]

mod bag;
mod entry;
mod iter;
mod marble;
mod tests;

pub use bag::*;
pub(crate) use entry::*;
pub use iter::*;
pub use marble::*;
