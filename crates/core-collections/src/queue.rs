//! Capacity-limited FIFO queue.
//!
//! Insertion order is arrival order; traversal over a positional range
//! observes the same order. Enqueue at capacity is rejected immediately
//! (a backpressure-by-drop policy, never oldest-first eviction) and the
//! rejected element is handed back to the caller so its release stays
//! explicit at the call site.

use std::collections::VecDeque;
use std::fmt;

/// Cap applied by [`BoundedQueue::with_default_limit`].
pub const DEFAULT_MAX_NODES: usize = 1024;

/// Rejected element handed back by [`BoundedQueue::enqueue`] when the
/// queue is at capacity.
pub struct QueueFull<T>(pub T);

impl<T> fmt::Debug for QueueFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueueFull(..)")
    }
}

impl<T> fmt::Display for QueueFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue is at capacity")
    }
}

#[derive(Debug)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    max_nodes: usize, // 0 = unlimited
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `max_nodes` elements; `0` means
    /// unlimited.
    pub fn new(max_nodes: usize) -> Self {
        Self {
            items: VecDeque::new(),
            max_nodes,
        }
    }

    /// Create a queue with the fixed default cap.
    pub fn with_default_limit() -> Self {
        Self::new(DEFAULT_MAX_NODES)
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append at the tail. Rejected without mutation when at capacity;
    /// returns the new size on success.
    pub fn enqueue(&mut self, value: T) -> Result<usize, QueueFull<T>> {
        if self.max_nodes > 0 && self.items.len() >= self.max_nodes {
            return Err(QueueFull(value));
        }
        self.items.push_back(value);
        Ok(self.items.len())
    }

    /// Remove and return the head element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Arrival-order traversal.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Arrival-order traversal restricted to positions `[from, to]`
    /// (0-based, inclusive). Positions outside the current size are simply
    /// never reached.
    pub fn iter_range(&self, from: usize, to: usize) -> impl Iterator<Item = &T> {
        let take = if to >= from { to - from + 1 } else { 0 };
        self.items.iter().skip(from).take(take)
    }

    /// Dequeue every element. The queue stays usable.
    pub fn flush(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = BoundedQueue::new(0);
        q.enqueue("a").unwrap();
        q.enqueue("b").unwrap();
        q.enqueue("c").unwrap();
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn exactly_capacity_enqueues_succeed() {
        let mut q = BoundedQueue::new(3);
        assert_eq!(q.enqueue(1).unwrap(), 1);
        assert_eq!(q.enqueue(2).unwrap(), 2);
        assert_eq!(q.enqueue(3).unwrap(), 3);
        // The fourth is rejected without mutation and handed back.
        match q.enqueue(4) {
            Err(QueueFull(rejected)) => assert_eq!(rejected, 4),
            Ok(_) => panic!("enqueue past capacity must be rejected"),
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(1));
    }

    #[test]
    fn zero_means_unlimited() {
        let mut q = BoundedQueue::new(0);
        for i in 0..DEFAULT_MAX_NODES + 10 {
            q.enqueue(i).unwrap();
        }
        assert_eq!(q.len(), DEFAULT_MAX_NODES + 10);
    }

    #[test]
    fn default_limit_applies() {
        let q: BoundedQueue<u8> = BoundedQueue::with_default_limit();
        assert_eq!(q.max_nodes(), DEFAULT_MAX_NODES);
    }

    #[test]
    fn range_traversal_in_arrival_order() {
        let mut q = BoundedQueue::new(0);
        for i in 0..8 {
            q.enqueue(i).unwrap();
        }
        let seen: Vec<i32> = q.iter_range(2, 4).copied().collect();
        assert_eq!(seen, vec![2, 3, 4]);
    }

    #[test]
    fn range_past_size_stops_quietly() {
        let mut q = BoundedQueue::new(0);
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        let seen: Vec<i32> = q.iter_range(1, 10).copied().collect();
        assert_eq!(seen, vec![2]);
        assert_eq!(q.iter_range(5, 9).count(), 0);
    }

    #[test]
    fn inverted_range_is_empty() {
        let mut q = BoundedQueue::new(0);
        q.enqueue(1).unwrap();
        assert_eq!(q.iter_range(1, 0).count(), 0);
    }

    #[test]
    fn flush_empties_but_queue_stays_usable() {
        let mut q = BoundedQueue::new(2);
        q.enqueue("x").unwrap();
        q.enqueue("y").unwrap();
        q.flush();
        assert!(q.is_empty());
        assert_eq!(q.enqueue("z").unwrap(), 1);
    }
}
