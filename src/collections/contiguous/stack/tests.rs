#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::error::{ConcurrentModification, EmptyCollection};

#[test]
fn test_push_pop() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert!(
        matches!(stack.pop(), Err(EmptyCollection(_))),
        "Popping from an empty Stack should fail."
    );

    stack.push(1);
    stack.push_all([2, 3, 4]);
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.peek(), Some(&4), "The last pushed element should be on top.");

    assert_eq!(stack.pop(), Ok(4));
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.iter().copied().collect::<Vector<_>>(), [1, 2].into_iter().collect());
}

#[test]
fn test_pop_all() {
    let mut stack: Stack<_> = (0..5).collect();

    assert_eq!(
        stack.pop_all(),
        Ok((0..5).collect()),
        "Popping everything should return the elements from the bottom to the top."
    );
    assert!(stack.is_empty());
    assert!(matches!(stack.pop_all(), Err(EmptyCollection(_))));

    stack.push(10);
    assert_eq!(stack.peek(), Some(&10), "The Stack should be usable after being emptied.");
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut stack: Stack<_> = (0..3).map(|_| counter.clone()).collect();

    stack.clear();
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(counter.take(), 3, "Every element should be dropped exactly once.");
}

#[test]
fn test_cursor_fail_fast() {
    let mut stack: Stack<_> = (1..=3).collect();
    let mut cursor = stack.cursor();

    assert_eq!(cursor.next(&stack), Ok(Some(&1)), "Cursors should start at the bottom.");
    assert_eq!(cursor.has_next(&stack), Ok(true));

    stack.push(4);
    assert_eq!(cursor.next(&stack), Err(ConcurrentModification));

    let cursor = stack.cursor();
    stack.pop_all().unwrap();
    assert_eq!(
        cursor.has_next(&stack),
        Err(ConcurrentModification),
        "Popping everything should invalidate existing cursors."
    );
}

#[test]
fn test_display() {
    let stack: Stack<_> = ["a", "b"].into_iter().collect();
    assert_eq!(format!("{stack}"), r#"["a", "b"]"#);
}
