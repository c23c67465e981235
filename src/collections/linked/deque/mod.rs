//! A module containing [`Deque`] and its iterators.
//!
//! [`Deque`] is also re-exported under the parent module.

mod deque;
mod iter;
mod length;
mod node;
mod tests;

pub use deque::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
