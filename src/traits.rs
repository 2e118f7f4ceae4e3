//! Common queue interface
//!
//! [`Queue`] captures the operations host code needs from a priority queue
//! without committing to a particular storage or ordering. It pairs each
//! query with two flavours:
//!
//! - optional variants ([`peek`](Queue::peek), [`poll`](Queue::poll)) return
//!   `None` on an empty queue;
//! - required variants ([`element`](Queue::element), [`remove`](Queue::remove))
//!   fail with [`QueueError::EmptyContainer`] instead.
//!
//! # Example
//!
//! ```rust
//! use array_priority_queue::{PriorityQueue, Queue, QueueError};
//!
//! fn drain<Q: Queue<i32>>(queue: &mut Q) -> Vec<i32> {
//!     let mut out = Vec::new();
//!     while let Ok(item) = queue.remove() {
//!         out.push(item);
//!     }
//!     out
//! }
//!
//! let mut queue = PriorityQueue::new();
//! Queue::offer(&mut queue, 3).unwrap();
//! Queue::offer(&mut queue, 1).unwrap();
//! assert_eq!(drain(&mut queue), vec![1, 3]);
//! assert_eq!(Queue::element(&queue), Err(QueueError::EmptyContainer));
//! ```

use crate::error::{QueueError, Result};

/// Base trait for queues that hand out elements in priority order
pub trait Queue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityExceeded`] if the queue cannot grow to hold it.
    fn offer(&mut self, item: T) -> Result<()>;

    /// Returns the highest-priority element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    fn poll(&mut self) -> Option<T>;

    /// Removes every element
    fn clear(&mut self);

    /// Like [`peek`](Queue::peek), but an empty queue is an error
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    fn element(&self) -> Result<&T> {
        self.peek().ok_or(QueueError::EmptyContainer)
    }

    /// Like [`poll`](Queue::poll), but an empty queue is an error
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    fn remove(&mut self) -> Result<T> {
        self.poll().ok_or(QueueError::EmptyContainer)
    }
}
