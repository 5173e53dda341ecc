extern crate std;

use std::vec::Vec;

use super::list::Queue;

mod list;

/// Walks the raw chain and checks the structural invariants of `q`.
fn assert_invariants(q: &Queue) {
    assert_eq!(q.head.is_none(), q.size == 0);
    assert_eq!(q.tail.is_none(), q.size == 0);
    if q.size == 1 {
        assert_eq!(q.head, q.tail);
    }

    let mut count = 0;
    let mut last = None;
    let mut current = q.head;
    while let Some(node) = current {
        count += 1;
        last = Some(node);
        current = unsafe { node.as_ref().next };
    }
    assert_eq!(count, q.size);
    assert_eq!(last, q.tail);
}

fn values(q: &Queue) -> Vec<&str> {
    q.iter().collect()
}

fn queue_of(items: &[&str]) -> Queue {
    let mut q = Queue::new();
    for item in items {
        q.insert_tail(item).unwrap();
    }
    q
}
