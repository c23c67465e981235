#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::error::ConcurrentModification;

fn sample() -> BinaryTreeSet<i32> {
    [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
}

fn pre_order(set: &BinaryTreeSet<i32>) -> Vector<i32> {
    let mut keys = Vector::new();
    set.for_each_pre_order(|key| keys.push(*key));
    keys
}

#[test]
fn test_insert_and_contains() {
    let mut set = BinaryTreeSet::new();
    assert!(set.is_empty());
    assert_eq!(set.root(), None);

    assert!(set.insert(5));
    assert!(set.insert(3));
    assert!(!set.insert(5), "Inserting an equal key should be reported as a duplicate.");
    assert_eq!(set.len(), 2);

    assert!(set.contains(&3));
    assert!(!set.contains(&4));
    assert_eq!(set.root(), Some(&5), "The first key inserted should stay at the root.");
}

#[test]
fn test_traversals() {
    let set = sample();

    assert_eq!(set.to_vector(), [1, 3, 4, 5, 7, 8, 9].into_iter().collect());
    assert_eq!(pre_order(&set), [5, 3, 1, 4, 8, 7, 9].into_iter().collect());

    let mut post = Vector::new();
    set.for_each_post_order(|key| post.push(*key));
    assert_eq!(post, [1, 4, 3, 7, 9, 8, 5].into_iter().collect());

    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&9));
}

#[test]
fn test_remove() {
    let mut set = sample();

    assert!(set.remove(&5));
    assert_eq!(
        set.root(),
        Some(&4),
        "Removing a node with two children should replace it with its in-order predecessor."
    );
    assert_eq!(set.to_vector(), [1, 3, 4, 7, 8, 9].into_iter().collect());
    assert_eq!(pre_order(&set), [4, 3, 1, 8, 7, 9].into_iter().collect());

    assert!(set.remove(&9), "Removing a leaf should succeed.");
    assert!(set.remove(&8), "Removing a node with one child should succeed.");
    assert_eq!(pre_order(&set), [4, 3, 1, 7].into_iter().collect());

    assert!(!set.remove(&42), "Removing a missing key should report that nothing changed.");
    assert_eq!(set.len(), 4);

    for key in [1, 3, 4, 7] {
        assert!(set.remove(&key));
    }
    assert!(set.is_empty());
    assert_eq!(set.root(), None);
}

#[test]
fn test_clear() {
    let mut set = sample();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);

    set.clear();
    assert!(set.is_empty(), "Clearing twice should be harmless.");

    assert!(set.insert(1));
    assert_eq!(set.root(), Some(&1));
}

#[test]
fn test_iterators() {
    let set = sample();

    let mut iter = set.iter();
    assert_eq!(iter.len(), 7);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.clone().copied().collect::<Vector<_>>(), [4, 5, 7, 8, 9].into_iter().collect());
    assert_eq!(iter.len(), 5);

    let owned: Vector<_> = set.clone().into_iter().collect();
    assert_eq!(owned, set.to_vector());
    assert_eq!(BinaryTreeSet::<i32>::new().iter().next(), None);
}

#[test]
fn test_clone_keeps_shape() {
    let mut set = sample();
    let cloned = set.clone();

    assert_eq!(set, cloned);
    assert_eq!(pre_order(&set), pre_order(&cloned), "A clone should have the same shape.");

    set.remove(&1);
    assert_ne!(set, cloned);
    assert!(cloned.contains(&1));
}

#[test]
fn test_format() {
    let set: BinaryTreeSet<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(format!("{set}"), "{1, 2, 3}");

    let single: BinaryTreeSet<_> = [7].into_iter().collect();
    assert_eq!(format!("{:?}", single.root), "┌    -\n(7)\n└    -");
}

#[test]
fn test_cursor_fail_fast() {
    let mut set = sample();

    let mut cursor = set.cursor();
    let mut seen = Vector::new();
    while cursor.has_next(&set).unwrap() {
        seen.push(*cursor.next(&set).unwrap().unwrap());
    }
    assert_eq!(seen, set.to_vector());
    assert_eq!(cursor.next(&set), Ok(None));

    let mut cursor = set.cursor();
    assert_eq!(cursor.next(&set), Ok(Some(&1)));
    assert!(!set.insert(4), "A duplicate insert shouldn't change the set.");
    assert_eq!(cursor.next(&set), Ok(Some(&3)), "Unchanged sets shouldn't invalidate cursors.");

    set.remove(&4);
    assert_eq!(cursor.has_next(&set), Err(ConcurrentModification));
    assert_eq!(cursor.next(&set), Err(ConcurrentModification));

    let cursor = set.cursor();
    set.clear();
    assert_eq!(cursor.has_next(&set), Err(ConcurrentModification));

    let other = set.clone();
    let mut cursor = set.cursor();
    assert_eq!(cursor.next(&other), Err(ConcurrentModification));
}

#[test]
fn test_degenerate_tree() {
    const LEN: u32 = 20_000;

    // Sorted insertion produces a tree as deep as it is long.
    let mut set: BinaryTreeSet<u32> = (0..LEN).collect();
    assert_eq!(set.len(), LEN as usize);
    assert_eq!(set.root(), Some(&0));
    assert!(set.contains(&(LEN - 1)), "Searching the deepest key shouldn't exhaust the stack.");
    assert!(!set.insert(LEN - 1));
    assert_eq!(set.last(), Some(&(LEN - 1)));

    assert!(set.remove(&(LEN - 1)), "Removing the deepest leaf should succeed.");
    assert!(set.remove(&0), "Removing a root with one child should succeed.");
    assert!(set.remove(&(LEN / 2)));
    assert_eq!(set.len(), LEN as usize - 3);
    assert!(set.iter().copied().eq((1..LEN - 1).filter(|key| *key != LEN / 2)));

    let mut visited = [0_usize; 3];
    set.for_each_in_order(|_| visited[0] += 1);
    set.for_each_pre_order(|_| visited[1] += 1);
    set.for_each_post_order(|_| visited[2] += 1);
    assert_eq!(visited, [set.len(); 3], "Every traversal should visit every key once.");

    let reversed: BinaryTreeSet<u32> = (0..LEN).rev().collect();
    assert_eq!(reversed.first(), Some(&0));
    drop(reversed);

    assert_eq!(set.into_iter().count(), LEN as usize - 3);

    let mut set: BinaryTreeSet<u32> = (0..LEN).collect();
    set.clear();
    assert!(set.is_empty(), "Clearing a deep tree shouldn't exhaust the stack.");
}
