mod binary_tree_set;
mod iter;
mod node;
mod tests;

pub use binary_tree_set::*;
pub use iter::*;
pub(crate) use node::*;
