use core::ptr::NonNull;

use super::element::{Element, Link};
use super::list::Queue;

/// The merge sort variant used by [`Queue::sort`].
///
/// Both variants are stable, relink elements without allocating, and produce
/// the same order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Top-down merge sort. Splits each run at its midpoint with a slow/fast
    /// walk and recurses on both halves; recursion depth is O(log n).
    #[default]
    Recursive,
    /// Bottom-up merge sort. Merges runs of width 1, 2, 4, ... in successive
    /// passes over the chain without any recursion.
    BottomUp,
}

impl Queue {
    /// Sorts the elements in ascending byte-wise order.
    ///
    /// The whole value takes part in the comparison, including any bytes
    /// after an embedded NUL.
    ///
    /// Queues with fewer than two elements are left as they are. The tail is
    /// updated to the actual last element afterwards.
    pub fn sort(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        if self.size < 2 {
            return;
        }
        tracing::trace!(size = self.size, strategy = ?self.sort_strategy, "sorting queue");

        // SAFETY: the chain starting at `head` is owned by this queue, holds
        // exactly `size` elements, and `&mut self` guarantees exclusivity.
        let head = unsafe {
            match self.sort_strategy {
                SortStrategy::Recursive => merge_sort(head),
                SortStrategy::BottomUp => merge_sort_bottom_up(head, self.size),
            }
        };

        let mut last = head;
        // SAFETY: as above; the sorted chain is still owned by this queue.
        while let Some(next) = unsafe { last.as_ref().next } {
            last = next;
        }
        self.head = Some(head);
        self.tail = Some(last);
    }
}

/// Whether `left` goes before `right` in the merged run.
///
/// Ties go to `left`, which keeps the sort stable.
///
/// # Safety
///
/// Both pointers must refer to live elements.
#[inline]
unsafe fn precedes(left: NonNull<Element>, right: NonNull<Element>) -> bool {
    unsafe { left.as_ref().value <= right.as_ref().value }
}

/// Merges two sorted, terminated chains into one and returns its head.
///
/// # Safety
///
/// Both chains must be disjoint, terminated and exclusively accessible.
unsafe fn merge(mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut cursor: &mut Link = &mut head;
    while let (Some(l), Some(r)) = (left, right) {
        let taken = unsafe {
            if precedes(l, r) {
                left = l.as_ref().next;
                l
            } else {
                right = r.as_ref().next;
                r
            }
        };
        *cursor = Some(taken);
        cursor = unsafe { &mut (*taken.as_ptr()).next };
    }
    *cursor = left.or(right);
    head
}

/// Cuts a terminated chain after its midpoint and returns the second half.
///
/// The first half keeps ⌈n/2⌉ elements, the second half gets ⌊n/2⌋.
///
/// # Safety
///
/// The chain must be terminated and exclusively accessible.
unsafe fn split(head: NonNull<Element>) -> Link {
    unsafe {
        let mut slow = head;
        let mut fast = head.as_ref().next;
        while let Some(step) = fast {
            let Some(jump) = step.as_ref().next else {
                break;
            };
            fast = jump.as_ref().next;
            match slow.as_ref().next {
                Some(next) => slow = next,
                None => break,
            }
        }
        (*slow.as_ptr()).next.take()
    }
}

/// # Safety
///
/// The chain must be terminated and exclusively accessible.
unsafe fn merge_sort(head: NonNull<Element>) -> NonNull<Element> {
    unsafe {
        let Some(second) = split(head) else {
            return head;
        };
        let left = merge_sort(head);
        let right = merge_sort(second);
        merge(Some(left), Some(right)).unwrap_or(left)
    }
}

/// Detaches everything after the first `width` elements and returns it.
///
/// # Safety
///
/// The chain must be terminated and exclusively accessible.
unsafe fn cut(head: NonNull<Element>, width: usize) -> Link {
    unsafe {
        let mut node = head;
        for _ in 1..width {
            match node.as_ref().next {
                Some(next) => node = next,
                None => return None,
            }
        }
        (*node.as_ptr()).next.take()
    }
}

/// # Safety
///
/// The chain must be terminated, hold `len` elements and be exclusively
/// accessible.
unsafe fn merge_sort_bottom_up(mut head: NonNull<Element>, len: usize) -> NonNull<Element> {
    let mut width = 1;
    while width < len {
        let mut sorted: Link = None;
        let mut cursor: &mut Link = &mut sorted;
        let mut rest: Link = Some(head);
        while let Some(left) = rest {
            unsafe {
                let right = cut(left, width);
                rest = match right {
                    Some(right) => cut(right, width),
                    None => None,
                };
                *cursor = merge(Some(left), right);
                while let Some(node) = *cursor {
                    cursor = &mut (*node.as_ptr()).next;
                }
            }
        }
        match sorted {
            Some(first) => head = first,
            None => break,
        }
        width = width.saturating_mul(2);
    }
    head
}
