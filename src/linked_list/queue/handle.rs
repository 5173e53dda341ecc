//! Operation surface for callers that may hold no queue at all.
//!
//! Each function mirrors a [`Queue`] method but accepts an optional queue and
//! reports failures through its return value: `false` for rejected inserts
//! and removals, a no-op for reverse and sort, `0` for size. Nothing here
//! panics on an absent or empty queue.

use core::alloc::Layout;
use core::ptr::NonNull;

use alloc::alloc::alloc;
use alloc::boxed::Box;

use crate::error::{QueueError, Result};

use super::list::Queue;

/// Allocates a new, empty queue on the heap.
///
/// # Errors
/// Returns [`QueueError::AllocationFailure`] if the allocator has no memory
/// for the queue.
pub fn create() -> Result<Box<Queue>> {
    let layout = Layout::new::<Queue>();
    // SAFETY: `Queue` is not zero sized.
    let ptr = unsafe { alloc(layout) }.cast::<Queue>();
    let Some(ptr) = NonNull::new(ptr) else {
        tracing::warn!(size = layout.size(), "queue allocation failed");
        return Err(QueueError::AllocationFailure("queue"));
    };
    // SAFETY: `ptr` was allocated by the global allocator with the layout of
    // `Queue`, which is exactly what `Box::from_raw` expects.
    unsafe {
        ptr.as_ptr().write(Queue::new());
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

/// Releases every element and then the queue itself.
pub fn destroy(q: Option<Box<Queue>>) {
    if let Some(q) = q {
        tracing::trace!(size = q.size(), "destroying queue");
        drop(q);
    }
}

/// Inserts a copy of `s` at the head. Returns `false` if `q` is absent or
/// allocation fails.
pub fn insert_head(q: Option<&mut Queue>, s: &str) -> bool {
    let Some(q) = q else {
        tracing::debug!("insert_head on an absent queue");
        return false;
    };
    q.insert_head(s).is_ok()
}

/// Inserts a copy of `s` at the tail. Returns `false` if `q` is absent or
/// allocation fails.
pub fn insert_tail(q: Option<&mut Queue>, s: &str) -> bool {
    let Some(q) = q else {
        tracing::debug!("insert_tail on an absent queue");
        return false;
    };
    q.insert_tail(s).is_ok()
}

/// Removes the head element, copying its value into `buf` if one is given.
///
/// The capacity of the copy is `buf.len()`; see [`Queue::remove_head_into`].
/// Returns `false` without mutation if `q` is absent or empty.
pub fn remove_head(q: Option<&mut Queue>, buf: Option<&mut [u8]>) -> bool {
    let Some(q) = q else {
        tracing::debug!("remove_head on an absent queue");
        return false;
    };
    match q.remove_head_into(buf) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "remove_head rejected");
            false
        }
    }
}

/// Number of elements, or `0` if `q` is absent.
pub fn size(q: Option<&Queue>) -> usize {
    q.map_or(0, Queue::size)
}

/// Reverses `q` in place; does nothing if `q` is absent.
pub fn reverse(q: Option<&mut Queue>) {
    if let Some(q) = q {
        q.reverse();
    }
}

/// Sorts `q` in ascending order; does nothing if `q` is absent.
pub fn sort(q: Option<&mut Queue>) {
    if let Some(q) = q {
        q.sort();
    }
}
