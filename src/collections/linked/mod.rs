//! Linked collection types. Currently only [`Deque`], a queue open at both ends.

pub mod deque;

#[doc(inline)]
pub use deque::Deque;
