#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::error::{ConcurrentModification, EmptyCollection};

fn contents<T: Copy>(deque: &Deque<T>) -> Vector<T> {
    deque.iter().copied().collect()
}

#[test]
fn test_enqueue_dequeue() {
    let mut deque = Deque::new();
    assert!(matches!(deque.dequeue_first(), Err(EmptyCollection(_))));
    assert!(matches!(deque.dequeue_last(), Err(EmptyCollection(_))));

    deque.enqueue_last(1);
    assert_eq!(deque.dequeue_first(), Ok(1), "A single element should leave from the front.");
    deque.enqueue_first(2);
    assert_eq!(deque.dequeue_first(), Ok(2));
    assert!(deque.is_empty());

    deque.enqueue_last(2);
    deque.enqueue_last(3);
    deque.enqueue_first(1);
    deque.verify_double_links();
    assert_eq!(contents(&deque), (1..=3).collect());
    assert_eq!(deque.front(), Some(&1));
    assert_eq!(deque.back(), Some(&3));

    assert_eq!(deque.dequeue_last(), Ok(3));
    deque.verify_double_links();
    assert_eq!(deque.dequeue_first(), Ok(1));
    deque.verify_double_links();
    assert_eq!(deque.len(), 1);
    assert_eq!(deque.front(), deque.back(), "A single element is both the front and the back.");
}

#[test]
fn test_batch_enqueue() {
    let mut deque: Deque<_> = [10, 20].into_iter().collect();

    deque.enqueue_all_first([1, 2, 3]);
    assert_eq!(
        contents(&deque),
        [3, 2, 1, 10, 20].into_iter().collect(),
        "Batch insertion at the front should reverse the batch."
    );

    deque.enqueue_all_last([4, 5]);
    assert_eq!(contents(&deque), [3, 2, 1, 10, 20, 4, 5].into_iter().collect());
    deque.verify_double_links();

    deque.enqueue_all_first([]);
    assert_eq!(deque.len(), 7);
}

#[test]
fn test_dequeue_all() {
    let mut deque: Deque<_> = (1..=5).collect();

    assert_eq!(
        deque.dequeue_all(),
        Ok([5, 4, 3, 2, 1].into_iter().collect()),
        "Dequeuing everything should start with the last element in."
    );
    assert!(deque.is_empty());
    assert!(matches!(deque.dequeue_all(), Err(EmptyCollection(_))));

    deque.enqueue_last(6);
    assert_eq!(deque.front(), Some(&6), "The Deque should be usable after being emptied.");
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new(0);
    let mut deque: Deque<_> = (0..4).map(|_| counter.clone()).collect();

    deque.clear();
    assert_eq!(counter.take(), 4, "Clearing should drop every element.");
    deque.clear();
    assert!(deque.is_empty(), "Clearing twice should be harmless.");

    deque.extend((0..3).map(|_| counter.clone()));
    drop(deque);
    assert_eq!(counter.take(), 3, "Dropping the Deque should drop every element.");

    let deque: Deque<_> = (0..5).map(|_| counter.clone()).collect();
    let mut iter = deque.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(
        counter.take(),
        5,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_iterators() {
    let deque: Deque<_> = (0..5).collect();

    let mut iter = deque.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.clone().count(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let owned: Vector<_> = deque.clone().into_iter().rev().collect();
    assert_eq!(owned, (0..5).rev().collect());
}

#[test]
fn test_equality_and_format() {
    let deque: Deque<_> = [1, 2, 3].into_iter().collect();
    let cloned = deque.clone();

    assert_eq!(deque, cloned);
    assert_ne!(deque, (1..=4).collect());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&deque), state.hash_one(&cloned));

    assert_eq!(format!("{deque}"), "(1) <-> (2) <-> (3)");
    assert_eq!(format!("{}", Deque::<u8>::new()), "");
}

#[test]
fn test_cursor_fail_fast() {
    let mut deque: Deque<_> = (1..=3).collect();

    let mut cursor = deque.cursor();
    let mut seen = Vector::new();
    while cursor.has_next(&deque).unwrap() {
        seen.push(*cursor.next(&deque).unwrap().unwrap());
    }
    assert_eq!(seen, (1..=3).collect(), "Cursors should run from the front to the back.");
    assert_eq!(cursor.next(&deque), Ok(None));

    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(Some(&1)));
    deque.dequeue_last().unwrap();
    assert_eq!(cursor.has_next(&deque), Err(ConcurrentModification));
    assert_eq!(
        cursor.next(&deque),
        Err(ConcurrentModification),
        "A cursor should never follow a node after the Deque was modified."
    );

    let cursor = deque.cursor();
    deque.clear();
    assert_eq!(cursor.has_next(&deque), Err(ConcurrentModification));

    let other = Deque::new();
    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&other), Err(ConcurrentModification));
    assert_eq!(cursor.next(&deque), Ok(None));
}
