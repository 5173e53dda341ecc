//! # Singly Linked Queue
//!
//! A FIFO queue of owned strings backed by a singly linked list.
//!
//! ## Core Components
//!
//! - [`Queue`]: owns the chain of elements and tracks its head, tail and size.
//! - [`SortStrategy`]: selects the merge sort variant used by [`Queue::sort`].
//! - [`Iter`]: a borrowing iterator over the values.
//! - [`handle`]: free functions for callers that hold an optional queue.
//!
//! ## Invariants
//!
//! - The size is zero exactly when both head and tail are absent.
//! - With a single element, head and tail are the same element.
//! - The tail never has a successor.
//! - [`Queue::reverse`] and [`Queue::sort`] only relink existing elements.

mod element;
mod iter;
mod list;
mod reverse;
mod sort;

pub mod handle;

#[cfg(test)]
mod tests;

pub use iter::Iter;
pub use list::Queue;
pub use sort::SortStrategy;
