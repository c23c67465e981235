use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// Nodes are allocated through Box rather than alloc directly, so that a removed node can be moved
// back out of the heap in one step by take_node.

/// A pointer to a node owned by a [`Deque`](super::Deque).
///
/// A NodeRef is only ever held by the Deque that allocated the node, by iterators borrowing that
/// Deque, or by cursors which check the Deque for modifications before following it. All of these
/// only dereference a NodeRef while the node is still linked into the Deque.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is linked into a live Deque, see the type level docs.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(self) -> &'a Link<T> {
        // SAFETY: The node is linked into a live Deque, see the type level docs.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: Links are only modified through the Deque's mutable methods, which never hold
        // another reference to the same link.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn prev<'a>(self) -> &'a Link<T> {
        // SAFETY: The node is linked into a live Deque, see the type level docs.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: Links are only modified through the Deque's mutable methods, which never hold
        // another reference to the same link.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of its allocation, freeing it.
    ///
    /// # Safety
    /// The node must have been created by [`NodeRef::from_node`] and must not be used again
    /// through this or any other NodeRef afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and is never used again, as the caller ensures.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
