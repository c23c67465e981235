//! A module containing [`Stack`] and its [`Cursor`].
//!
//! Borrowed iteration reuses [`vector::Iter`](super::vector::Iter), running from the bottom of the
//! Stack to the top.
//!
//! [`Stack`] is also re-exported under the parent module.

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;
