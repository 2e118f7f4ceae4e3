//! Error types for priority queue operations

use thiserror::Error;

/// Result type alias using [`QueueError`].
pub type Result<T> = std::result::Result<T, QueueError>;

/// Errors reported by [`PriorityQueue`](crate::PriorityQueue) and the [`Queue`](crate::Queue) trait.
///
/// Every fallible operation is atomic: when one of these is returned the queue
/// is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Construction or configuration asked for an unusable capacity
    #[error("invalid queue capacity: {capacity} (must be between 1 and {max})")]
    InvalidConfiguration { capacity: usize, max: usize },

    /// An absent value was offered to the queue
    #[error("null insertion is not allowed")]
    NullElementRejected,

    /// A required element was requested from an empty queue
    #[error("queue is empty")]
    EmptyContainer,

    /// Growing the backing storage would exceed the maximum capacity
    #[error("queue capacity exceeded: growing to {requested} would pass the maximum of {max}")]
    CapacityExceeded { requested: usize, max: usize },
}
