use scratch_collections::collections::bag::{Bag, Marble, Material};
use scratch_collections::collections::binary_tree::BinaryTreeSet;
use scratch_collections::collections::contiguous::{Stack, Vector};
use scratch_collections::collections::linked::Deque;
use scratch_collections::error::CollectionError;

fn main() -> Result<(), CollectionError> {
    println!("\n[Vector]\n");

    let mut vec = Vector::<u8>::with_cap(0);
    println!("{:?}", vec);

    for i in 0..8 {
        vec.push(i);
        println!("{:?}", vec);
    }

    vec.insert(2, 100);
    println!("{:?}", vec);
    vec.remove_item(&100)?;
    println!("{:?}", vec);
    println!("{}", vec.sub_list(2, 5)?);

    println!("\n[Stack]\n");

    let mut stack: Stack<_> = (1..=4).collect();
    println!("{:?}", stack);
    println!("popped {}", stack.pop()?);
    println!("{}", stack);

    println!("\n[Bag]\n");

    let red = Marble::new("red", Material::Glass);
    let blue = Marble::new("blue", Material::Steel);

    let mut bag = Bag::new();
    bag.add_unique(red.clone())?;
    bag.add_duplicate(&red)?;
    bag.add_unique(blue.clone())?;
    println!("{:?}", bag);
    println!("{}", bag);
    println!("glass marbles: {}", bag.count_by_category(&Material::Glass));

    bag.remove_one(&red)?;
    bag.clear_category(&Material::Steel);
    println!("{}", bag);

    println!("\n[Deque]\n");

    let mut deque = Deque::new();
    deque.enqueue_all_last([2, 3]);
    deque.enqueue_first(1);
    println!("{:?}", deque);
    println!("{}", deque);
    println!("dequeued {}", deque.dequeue_first()?);
    println!("{}", deque.dequeue_all()?);

    println!("\n[BinaryTreeSet]\n");

    let mut set: BinaryTreeSet<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    println!("{:?}", set);
    set.remove(&5);
    println!("{:?}", set);
    println!("{}", set);

    Ok(())
}
