use core::alloc::Layout;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};
use alloc::string::String;

use crate::error::{QueueError, Result};

/// A link to the next element of a chain.
pub(crate) type Link = Option<NonNull<Element>>;

/// A node of the queue's chain.
///
/// Elements are allocated one at a time with the global allocator so that an
/// out-of-memory condition surfaces as an error instead of an abort.
pub(crate) struct Element {
    pub(crate) value: String,
    pub(crate) next: Link,
}

impl Element {
    /// Copies `s` into a freshly allocated element with no successor.
    pub(crate) fn alloc(s: &str) -> Result<NonNull<Self>> {
        let value = copy_value(s)?;
        let layout = Layout::new::<Self>();
        // SAFETY: `Element` is not zero sized.
        let ptr = unsafe { alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            tracing::warn!(size = layout.size(), "element allocation failed");
            return Err(QueueError::AllocationFailure("element"));
        };
        // SAFETY: `ptr` is non-null, properly aligned for `Element` and uninitialized.
        unsafe { ptr.as_ptr().write(Self { value, next: None }) };
        Ok(ptr)
    }

    /// Releases the node and hands back its value.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Element::alloc`], must no longer be reachable
    /// from any chain and must not be used afterwards.
    pub(crate) unsafe fn consume(ptr: NonNull<Self>) -> String {
        unsafe {
            let element = ptr.as_ptr().read();
            dealloc(ptr.as_ptr().cast(), Layout::new::<Self>());
            element.value
        }
    }
}

fn copy_value(s: &str) -> Result<String> {
    let mut value = String::new();
    if value.try_reserve_exact(s.len()).is_err() {
        tracing::warn!(len = s.len(), "value allocation failed");
        return Err(QueueError::AllocationFailure("value"));
    }
    value.push_str(s);
    Ok(value)
}
