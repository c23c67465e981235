#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let old_ptr = arr.ptr;
    arr.realloc_with(ZeroSizedType::default, 30);
    assert_eq!(arr.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(arr.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = Array::from_fn(5, |i| i);
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc_with(|| 0, 5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc_with(|| 0, 10);
    for i in 0..5 {
        assert_eq!(arr[i], i, "When growing, all elements should remain in the Array.");
    }
    for i in 5..10 {
        assert_eq!(arr[i], 0, "When growing, all new elements should be filled.");
    }

    arr.realloc_with(|| unreachable!(), 0);
    assert_eq!(&*arr, &[] as &[usize]);

    assert_panics!({
        let mut arr = Array::from_fn(5, |i| i);
        arr.realloc_with(|| 0, isize::MAX as usize + 1)
    });

    let counter = CountedDrop::new(0);
    let mut arr = Array::from_fn(10, |_| counter.clone());
    arr.realloc_with(|| unreachable!(), 5);

    assert_eq!(
        counter.take(),
        5,
        "5 elements should have been dropped during shrinking reallocation."
    );
}

#[test]
fn test_optional_slots() {
    let mut arr: Array<Option<&str>> = Array::from_fn(2, |_| None);
    arr[1] = Some("b");
    arr.realloc_with(|| None, 4);

    assert_eq!(&*arr, &[None, Some("b"), None, None]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from_fn(10, |_| counter.clone());

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from_fn(5, |i| i);

    assert_eq!(
        arr,
        [0, 1, 2, 3, 4].into_iter().collect::<Array<_>>(),
        "Different construction methods should produce equal results."
    );
    assert_ne!([0, 1, 2, 5, 4].into_iter().collect::<Array<_>>(), arr);

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from_fn(5, |i| i)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from_fn(5, |i| i);
    let collected: Array<_> = arr.iter().cloned().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8], "Array mutated by iterator should equal this slice.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr = Array::from_fn(10, |_| counter.clone());

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );
}
