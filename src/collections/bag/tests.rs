#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::error::{ConcurrentModification, DuplicateElement, InvalidCapacity, NotFound};
use crate::util::panic::assert_panics;

fn marble(color: &str, material: Material) -> Marble {
    Marble::new(color, material)
}

fn colors(bag: &Bag<Marble>) -> Vector<&str> {
    bag.iter().map(Marble::color).collect()
}

#[test]
fn test_capacity() {
    assert_eq!(Bag::<Marble>::new().cap(), DEFAULT_CAP);
    assert_eq!(Bag::<Marble>::with_cap(3).cap(), 3);
    assert_eq!(
        Bag::<Marble>::try_with_cap(0).map(|bag| bag.cap()),
        Err(InvalidCapacity { cap: 0 }),
        "A Bag needs room for at least one entry."
    );
    assert_panics!({
        Bag::<Marble>::with_cap(0);
    });

    let mut bag = Bag::with_cap(2);
    bag.add_unique(marble("a", Material::Glass)).unwrap();
    bag.add_unique(marble("b", Material::Glass)).unwrap();
    assert_eq!(bag.cap(), 2);
    bag.add_unique(marble("c", Material::Glass)).unwrap();
    assert_eq!(bag.cap(), 4, "A full Bag should double its capacity.");

    bag.trim_to_size();
    assert_eq!(bag.cap(), 3);
    assert_eq!(bag.len(), 3);
}

#[test]
fn test_unique_and_duplicates() {
    let red = marble("red", Material::Glass);
    let mut bag = Bag::new();

    assert_eq!(bag.add_duplicate(&red), Err(NotFound), "Duplicates need an existing entry.");
    assert_eq!(bag.remove_one(&red), Err(NotFound));

    bag.add_unique(red.clone()).unwrap();
    assert!(
        matches!(bag.add_unique(red.clone()), Err(DuplicateElement(_))),
        "Adding an existing value as unique should fail."
    );

    bag.add_duplicate(&red).unwrap();
    bag.add_duplicate(&red).unwrap();
    assert_eq!(bag.len(), 3);
    assert_eq!(bag.distinct_len(), 1);
    assert_eq!(bag.count_of(&red), 3);
    assert!(bag.has_value(&red));
    assert!(!bag.has_value(&marble("red", Material::Clay)), "Material is part of the identity.");
}

#[test]
fn test_iteration_order() {
    let a = marble("a", Material::Glass);
    let b = marble("b", Material::Steel);
    let mut bag = Bag::new();

    bag.add_unique(a.clone()).unwrap();
    bag.add_duplicate(&a).unwrap();
    bag.add_unique(b.clone()).unwrap();
    assert_eq!(colors(&bag), ["a", "a", "b"].into_iter().collect());

    bag.add_duplicate(&b).unwrap();
    bag.add_duplicate(&a).unwrap();
    assert_eq!(
        colors(&bag),
        ["a", "a", "a", "b", "b"].into_iter().collect(),
        "Copies of a value should stay together, in the order values were first added."
    );
    assert_eq!(bag.iter().len(), 5);
    assert_eq!(format!("{}", Bag::<Marble>::new()), "[]");
}

#[test]
fn test_remove_one() {
    let a = marble("a", Material::Glass);
    let b = marble("b", Material::Steel);
    let c = marble("c", Material::Clay);
    let mut bag = Bag::with_cap(4);
    for value in [&a, &b, &c] {
        bag.add_unique(value.clone()).unwrap();
    }
    bag.add_duplicate(&b).unwrap();

    bag.remove_one(&b).unwrap();
    assert_eq!(bag.count_of(&b), 1);
    assert_eq!(bag.distinct_len(), 3);

    bag.remove_one(&b).unwrap();
    assert!(!bag.has_value(&b), "Removing the last copy should remove the entry.");
    assert_eq!(colors(&bag), ["a", "c"].into_iter().collect());
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.cap(), 4, "Removing a value shouldn't change the capacity.");
}

#[test]
fn test_categories() {
    let mut bag = Bag::new();
    for (color, material) in [
        ("a", Material::Glass),
        ("b", Material::Steel),
        ("c", Material::Glass),
        ("d", Material::Clay),
    ] {
        bag.add_unique(marble(color, material)).unwrap();
    }
    bag.add_duplicate(&marble("a", Material::Glass)).unwrap();

    assert_eq!(
        bag.count_by_category(&Material::Glass),
        2,
        "Categories should count distinct values, not copies."
    );
    assert_eq!(bag.count_by_category(&Material::Steel), 1);

    bag.clear_category(&Material::Glass);
    assert_eq!(colors(&bag), ["b", "d"].into_iter().collect());
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.count_by_category(&Material::Glass), 0);
    assert_eq!(bag.cap(), DEFAULT_CAP);
}

#[test]
fn test_clear_all() {
    let mut bag = Bag::with_cap(1);
    for color in ["a", "b", "c"] {
        bag.add_unique(marble(color, Material::Clay)).unwrap();
    }

    bag.clear_all();
    assert!(bag.is_empty());
    assert_eq!(bag.cap(), DEFAULT_CAP, "Clearing should restore the default capacity.");

    bag.clear_all();
    assert_eq!(bag.len(), 0, "Clearing twice should be harmless.");

    bag.trim_to_size();
    assert_eq!(bag.cap(), 0);
    bag.add_unique(marble("e", Material::Clay)).unwrap();
    assert_eq!(bag.len(), 1, "A trimmed, empty Bag should still accept values.");
}

#[test]
fn test_cursor_fail_fast() {
    let a = marble("a", Material::Glass);
    let b = marble("b", Material::Steel);
    let mut bag = Bag::new();
    bag.add_unique(a.clone()).unwrap();
    bag.add_duplicate(&a).unwrap();
    bag.add_unique(b.clone()).unwrap();

    let mut cursor = bag.cursor();
    let mut seen = Vector::new();
    while cursor.has_next(&bag).unwrap() {
        seen.push(cursor.next(&bag).unwrap().unwrap().color().to_owned());
    }
    assert_eq!(seen, ["a", "a", "b"].map(String::from).into_iter().collect());
    assert_eq!(cursor.next(&bag), Ok(None));

    let mut cursor = bag.cursor();
    assert_eq!(cursor.next(&bag), Ok(Some(&a)));
    bag.clear_category(&Material::Clay);
    assert_eq!(
        cursor.next(&bag),
        Err(ConcurrentModification),
        "Every mutation should invalidate cursors, even one that removes nothing."
    );

    let cursor = bag.cursor();
    let cloned = bag.clone();
    assert_eq!(cursor.has_next(&cloned), Err(ConcurrentModification));
    assert_eq!(cursor.has_next(&bag), Ok(true));
}
