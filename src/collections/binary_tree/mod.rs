//! Binary tree collection types. Currently only [`BinaryTreeSet`], an unbalanced binary search
//! tree.

pub mod set;

#[doc(inline)]
pub use set::BinaryTreeSet;
