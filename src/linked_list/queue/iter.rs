use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::element::Link;
use super::list::Queue;

/// An iterator over the values of a [`Queue`], from head to tail.
pub struct Iter<'a> {
    current: Link,
    remaining: usize,
    _queue: PhantomData<&'a Queue>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(head: Link, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            // SAFETY: the queue is borrowed for `'a`, so no element can be
            // released or relinked while the iterator is alive.
            let node = unsafe { &*node.as_ptr() };
            self.current = node.next;
            self.remaining -= 1;
            node.value.as_str()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
