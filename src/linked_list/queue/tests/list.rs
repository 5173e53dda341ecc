extern crate std;

use std::{format, string::String, vec, vec::Vec};

use crate::error::QueueError;

use super::super::list::Queue;
use super::{assert_invariants, queue_of, values};

#[test]
fn test_new_queue_is_empty() {
    let q = Queue::new();
    assert_eq!(q.size(), 0);
    assert!(q.is_empty());
    assert!(q.head().is_none());
    assert!(q.tail().is_none());
    assert_invariants(&q);
}

#[test]
fn test_insert_head_links_in_front() {
    let mut q = Queue::new();
    q.insert_head("a").unwrap();
    assert_eq!(q.head(), Some("a"));
    assert_eq!(q.tail(), Some("a"));
    assert_invariants(&q);

    q.insert_head("b").unwrap();
    assert_eq!(values(&q), vec!["b", "a"]);
    assert_eq!(q.tail(), Some("a"));
    assert_eq!(q.size(), 2);
    assert_invariants(&q);
}

#[test]
fn test_insert_tail_appends() {
    let mut q = Queue::new();
    q.insert_tail("a").unwrap();
    q.insert_tail("b").unwrap();
    q.insert_head("c").unwrap();
    assert_eq!(values(&q), vec!["c", "a", "b"]);
    assert_eq!(q.tail(), Some("b"));
    assert_invariants(&q);
}

#[test]
fn test_insert_copies_value() {
    let mut q = Queue::new();
    let mut source = String::from("value");
    q.insert_tail(&source).unwrap();
    source.push_str("_changed");
    assert_eq!(q.head(), Some("value"));
}

#[test]
fn test_remove_head_fifo() {
    let mut q = queue_of(&["one", "two", "three"]);
    assert_eq!(q.remove_head().unwrap(), "one");
    assert_eq!(q.size(), 2);
    assert_invariants(&q);
    assert_eq!(q.remove_head().unwrap(), "two");
    assert_eq!(q.remove_head().unwrap(), "three");
    assert!(q.is_empty());
    assert_invariants(&q);
}

#[test]
fn test_remove_head_empty() {
    let mut q = Queue::new();
    assert!(matches!(
        q.remove_head(),
        Err(QueueError::InvalidOperation(_))
    ));
    assert_eq!(q.size(), 0);
    assert_invariants(&q);
}

#[test]
fn test_remove_last_clears_tail() {
    let mut q = queue_of(&["only"]);
    q.remove_head().unwrap();
    assert!(q.tail().is_none());
    assert_invariants(&q);

    // The queue stays usable after draining.
    q.insert_tail("again").unwrap();
    assert_eq!(q.head(), Some("again"));
    assert_eq!(q.tail(), Some("again"));
    assert_invariants(&q);
}

#[test]
fn test_remove_head_into_copies_with_terminator() {
    let mut q = queue_of(&["hello"]);
    let mut buf = [0xffu8; 16];
    q.remove_head_into(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf[..6], b"hello\0");
    assert_eq!(buf[6], 0xff);
}

#[test]
fn test_remove_head_into_truncates() {
    let mut q = queue_of(&["hello"]);
    let mut buf = [0xffu8; 4];
    q.remove_head_into(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf, b"hel\0");
    assert!(q.is_empty());
}

#[test]
fn test_remove_head_into_zero_capacity() {
    let mut q = queue_of(&["hello", "world"]);
    let mut buf = [0xffu8; 4];
    q.remove_head_into(Some(&mut buf[..0])).unwrap();
    assert_eq!(buf, [0xff; 4]);
    assert_eq!(q.size(), 1);
    assert_invariants(&q);
}

#[test]
fn test_remove_head_into_capacity_one() {
    let mut q = queue_of(&["hello"]);
    let mut buf = [0xffu8; 4];
    q.remove_head_into(Some(&mut buf[..1])).unwrap();
    assert_eq!(buf, [0, 0xff, 0xff, 0xff]);
}

#[test]
fn test_remove_head_into_without_buffer() {
    let mut q = queue_of(&["a", "b"]);
    q.remove_head_into(None).unwrap();
    assert_eq!(values(&q), vec!["b"]);
    assert!(q.remove_head_into(None).is_ok());
    assert!(q.remove_head_into(None).is_err());
}

#[test]
fn test_clear_and_reuse() {
    let mut q = queue_of(&["a", "b", "c"]);
    q.clear();
    assert!(q.is_empty());
    assert_invariants(&q);
    q.insert_head("d").unwrap();
    assert_eq!(values(&q), vec!["d"]);
}

#[test]
fn test_drop_long_queue() {
    let mut q = Queue::new();
    for i in 0..200_000 {
        q.insert_tail(&format!("{}", i)).unwrap();
    }
    assert_eq!(q.size(), 200_000);
    drop(q);
}

#[test]
fn test_iter_is_exact_size() {
    let q = queue_of(&["a", "b", "c"]);
    let mut iter = q.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    let rest: Vec<&str> = iter.collect();
    assert_eq!(rest, vec!["b", "c"]);

    let mut count = 0;
    for _ in &q {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_debug_lists_values() {
    let q = queue_of(&["x", "y"]);
    assert_eq!(format!("{:?}", q), "[\"x\", \"y\"]");
    assert_eq!(format!("{:?}", Queue::default()), "[]");
}

#[test]
fn test_remove_head_into_stops_at_nul() {
    let mut q = queue_of(&["a\0z", "\0tail"]);
    let mut buf = [0xffu8; 8];
    q.remove_head_into(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf[..3], b"a\0\xff");

    let mut buf = [0xffu8; 8];
    q.remove_head_into(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf[..2], b"\0\xff");
    assert!(q.is_empty());
}
