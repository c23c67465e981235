//! A module containing [`Vector`] and associtated types.
//!
//! Borrowed iteration is provided by [`Iter`] and [`IterMut`], owned iteration by [`IntoIter`],
//! which is a re-export of [`array::IntoIter`](super::array::IntoIter). [`Cursor`] is a detached,
//! fail-fast alternative to [`Iter`].
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;
