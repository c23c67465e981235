//! Contiguous collection types. [`Array`] is sized at runtime but fixed afterwards, [`Vector`]
//! grows and shrinks as elements are added and removed and [`Stack`] restricts a Vector to
//! last-in-first-out access.
#![warn(missing_docs)]

pub mod array;
pub mod stack;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use vector::Vector;
