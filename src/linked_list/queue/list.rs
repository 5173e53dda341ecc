use core::fmt;

use alloc::string::String;

use crate::error::{QueueError, Result};

use super::element::{Element, Link};
use super::iter::Iter;
use super::sort::SortStrategy;

/// A singly linked queue of owned strings.
///
/// The queue keeps a pointer to both ends of its chain so that insertion at
/// either end is O(1). Removal only happens at the head.
pub struct Queue {
    pub(super) head: Link,
    pub(super) tail: Link,
    pub(super) size: usize,
    pub(super) sort_strategy: SortStrategy,
}

impl Queue {
    /// Creates a new, empty queue that sorts with [`SortStrategy::Recursive`].
    pub const fn new() -> Self {
        Self::with_sort_strategy(SortStrategy::Recursive)
    }

    /// Creates a new, empty queue with a custom sort strategy.
    ///
    /// # Arguments
    /// * `sort_strategy` - The merge sort variant used by [`Queue::sort`]
    pub const fn with_sort_strategy(sort_strategy: SortStrategy) -> Self {
        Queue {
            head: None,
            tail: None,
            size: 0,
            sort_strategy,
        }
    }

    /// The merge sort variant used by [`Queue::sort`].
    pub fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy
    }

    /// Changes the merge sort variant used by later calls to [`Queue::sort`].
    pub fn set_sort_strategy(&mut self, sort_strategy: SortStrategy) {
        self.sort_strategy = sort_strategy;
    }

    /// Copies `s` into a new element and links it in front of the head.
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationFailure`] if the element or the copy
    /// of `s` cannot be allocated. The queue is left untouched.
    pub fn insert_head(&mut self, s: &str) -> Result<()> {
        let mut node = Element::alloc(s)?;
        // SAFETY: `node` was just allocated and is not shared yet.
        unsafe { node.as_mut().next = self.head };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.size += 1;
        Ok(())
    }

    /// Copies `s` into a new element and links it after the tail.
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationFailure`] if the element or the copy
    /// of `s` cannot be allocated. The queue is left untouched.
    pub fn insert_tail(&mut self, s: &str) -> Result<()> {
        let node = Element::alloc(s)?;
        match self.tail {
            // SAFETY: the tail is owned by this queue and `&mut self` is exclusive.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Detaches the head element and returns its value.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidOperation`] if the queue is empty.
    pub fn remove_head(&mut self) -> Result<String> {
        let head = self
            .head
            .ok_or(QueueError::InvalidOperation("remove_head on an empty queue"))?;
        // SAFETY: the head is owned by this queue and is unlinked before it
        // is consumed.
        unsafe {
            self.head = head.as_ref().next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            Ok(Element::consume(head))
        }
    }

    /// Detaches the head element and copies its value into `buf`.
    ///
    /// The copy follows bounded C string semantics: the value is copied up
    /// to its first NUL byte, if it has one, and at most `buf.len() - 1`
    /// bytes are written, followed by a NUL terminator. An empty buffer
    /// receives nothing, and `None` skips the copy entirely. In every case
    /// the element is removed and released.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidOperation`] if the queue is empty.
    pub fn remove_head_into(&mut self, buf: Option<&mut [u8]>) -> Result<()> {
        let value = self.remove_head()?;
        if let Some(buf) = buf {
            copy_bounded(&value, buf);
        }
        Ok(())
    }

    /// Number of elements in the queue.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`Queue::size`].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The value at the head of the queue, if any.
    pub fn head(&self) -> Option<&str> {
        // SAFETY: elements live as long as the queue borrow.
        self.head.map(|node| unsafe { (*node.as_ptr()).value.as_str() })
    }

    /// The value at the tail of the queue, if any.
    pub fn tail(&self) -> Option<&str> {
        // SAFETY: elements live as long as the queue borrow.
        self.tail.map(|node| unsafe { (*node.as_ptr()).value.as_str() })
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.size)
    }

    /// Releases every element, leaving the queue empty.
    ///
    /// The chain is walked iteratively, so arbitrarily long queues are
    /// released without deep recursion.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.size = 0;
        while let Some(node) = current {
            // SAFETY: every node of the detached chain is visited exactly once.
            unsafe {
                current = node.as_ref().next;
                drop(Element::consume(node));
            }
        }
    }
}

/// Writes at most `buf.len() - 1` bytes of `value`, stopping at its first
/// NUL, plus a NUL terminator.
fn copy_bounded(value: &str, buf: &mut [u8]) {
    let Some(room) = buf.len().checked_sub(1) else {
        return;
    };
    let bytes = value.as_bytes();
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let n = len.min(room);
    buf[..n].copy_from_slice(&bytes[..n]);
    buf[n] = 0;
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The queue exclusively owns its chain and has no interior mutability.
unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}
