use std::fmt::{self, Debug, Formatter};

/// Formats a cloneable iterator as a list, for use as a field of a larger debug struct.
pub(crate) struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
