//! Linked list based collections.
//!
//! [`queue::Queue`] is a singly linked queue of owned strings. Every element
//! is a separately allocated node that the queue owns; insertion copies the
//! caller's string, removal hands the value back and releases the node.
//!
//! # Examples
//!
//! ```
//! use mola_queue::linked_list::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("banana").unwrap();
//! queue.insert_tail("apple").unwrap();
//! queue.insert_head("cherry").unwrap();
//!
//! assert_eq!(queue.size(), 3);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["cherry", "banana", "apple"]);
//!
//! queue.sort();
//! assert_eq!(queue.remove_head().unwrap(), "apple");
//!
//! queue.reverse();
//! assert_eq!(queue.head(), Some("cherry"));
//! assert_eq!(queue.tail(), Some("banana"));
//! ```
pub mod queue;
