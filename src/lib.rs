//! Singly linked string queue with in-place reversal and merge sort.

#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{QueueError, Result};
pub use linked_list::queue::{Queue, SortStrategy};
