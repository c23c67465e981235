use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::Vector;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub key: T,
}

// None of these methods recurse. The tree isn't balanced, so its depth is only bounded by its
// length and a recursive walk could run out of stack.
impl<T: Ord> Branch<T> {
    /// Inserts `key` into the first empty branch found by descending from self, returning false
    /// without changing anything if an equal key is found on the way.
    pub fn insert(&mut self, key: T) -> bool {
        let mut branch = self;
        while let Some(ref mut node) = branch.0 {
            branch = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        branch.0 = Some(Box::new(Node {
            left: None.into(),
            right: None.into(),
            key,
        }));
        true
    }

    pub fn contains(&self, key: &T) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut branch = self;
        loop {
            // Compare through a shared borrow first, so that the matching branch is still free to
            // be borrowed mutably by take_root.
            let ordering = key.cmp(&branch.0.as_ref()?.key);
            if ordering == Ordering::Equal {
                return branch.take_root();
            }

            let Some(ref mut node) = branch.0 else {
                return None;
            };
            branch = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Removes the key at the top of this branch. A node with two children keeps its place and has
    /// its key overwritten with its in-order predecessor, which is removed from the left branch
    /// instead. Any other node is replaced by its only child, if it has one.
    pub fn take_root(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;

        if node.left.is_some() && node.right.is_some() {
            let predecessor = node.left.take_last()?;
            return Some(mem::replace(&mut node.key, predecessor));
        }

        let Node { left, right, key } = *self.0.take()?;
        *self = if left.is_some() { left } else { right };
        Some(key)
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.0.as_ref()?;
        while let Some(left) = &node.left.0 {
            node = left;
        }
        Some(&node.key)
    }

    pub fn take_first(&mut self) -> Option<T> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(ref mut node) = branch.0 else {
                return None;
            };
            branch = &mut node.left;
        }
        branch.take_root()
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.0.as_ref()?;
        while let Some(right) = &node.right.0 {
            node = right;
        }
        Some(&node.key)
    }

    pub fn take_last(&mut self) -> Option<T> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.right.is_some()) {
            let Some(ref mut node) = branch.0 else {
                return None;
            };
            branch = &mut node.right;
        }
        branch.take_root()
    }

    pub fn for_each_in_order<'a, F: FnMut(&'a T)>(&'a self, f: &mut F) {
        let mut stack: Vector<&'a Node<T>> = Vector::with_cap(0);
        let mut branch = self;
        loop {
            while let Some(node) = branch.0.as_deref() {
                stack.push(node);
                branch = &node.left;
            }

            let Some(node) = stack.pop() else {
                break;
            };
            f(&node.key);
            branch = &node.right;
        }
    }

    pub fn for_each_pre_order<'a, F: FnMut(&'a T)>(&'a self, f: &mut F) {
        let mut stack: Vector<&'a Node<T>> = Vector::with_cap(0);
        if let Some(node) = self.0.as_deref() {
            stack.push(node);
        }

        while let Some(node) = stack.pop() {
            f(&node.key);
            // Right first, so that the left branch is popped first.
            if let Some(right) = node.right.0.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.0.as_deref() {
                stack.push(left);
            }
        }
    }

    pub fn for_each_post_order<'a, F: FnMut(&'a T)>(&'a self, f: &mut F) {
        // Each node is pushed twice, once to schedule its branches and once more, marked as
        // expanded, to be visited after them.
        let mut stack: Vector<(&'a Node<T>, bool)> = Vector::with_cap(0);
        if let Some(node) = self.0.as_deref() {
            stack.push((node, false));
        }

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                f(&node.key);
                continue;
            }

            stack.push((node, true));
            if let Some(right) = node.right.0.as_deref() {
                stack.push((right, false));
            }
            if let Some(left) = node.left.0.as_deref() {
                stack.push((left, false));
            }
        }
    }
}

impl<T: Ord> Drop for Branch<T> {
    fn drop(&mut self) {
        // Rotate left children up until the top node has none, then drop it on its own. Every node
        // is dropped with two empty branches, so dropping never recurses.
        while let Some(mut node) = self.0.take() {
            match node.left.0.take() {
                Some(mut left) => {
                    node.left.0 = left.right.0.take();
                    left.right.0 = Some(node);
                    self.0 = Some(left);
                },
                None => self.0 = node.right.0.take(),
            }
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                prefix_lines(&format!("{:?}", node.left), "┌    "),
                node.key,
                prefix_lines(&format!("{:?}", node.right), "└    "),
            ),
            None => write!(f, "-"),
        }
    }
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut out = String::new();
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}
