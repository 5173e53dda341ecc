use super::element::Link;
use super::list::Queue;

impl Queue {
    /// Reverses the order of the elements in place.
    ///
    /// Only successor links are rewritten; no element or value is allocated
    /// or released. The walk is iterative and uses constant extra space, so
    /// the length of the queue does not bound the stack depth.
    pub fn reverse(&mut self) {
        let Some(old_head) = self.head else {
            return;
        };
        tracing::trace!(size = self.size, "reversing queue");

        let mut prev: Link = None;
        let mut current: Link = Some(old_head);
        while let Some(mut node) = current {
            // SAFETY: each node is owned by this queue and visited once;
            // `&mut self` guarantees exclusive access to the chain.
            unsafe {
                let node_ref = node.as_mut();
                current = node_ref.next;
                node_ref.next = prev;
            }
            prev = Some(node);
        }

        self.tail = Some(old_head);
        self.head = prev;
    }
}
