//! Array-Backed Priority Queue for Rust
//!
//! This crate provides a binary-heap priority queue stored in a flat, growable
//! array. It is a building block for algorithms that repeatedly extract the
//! smallest (or comparator-defined first) element: schedulers, graph searches,
//! discrete event simulation.
//!
//! # Features
//!
//! - **O(1) peek**, **O(log n) offer/poll**: classic sift-up / sift-down over level-order storage
//! - **Pluggable ordering**: natural [`Ord`] order, [`ReverseOrder`], or any closure via [`Comparator`]
//! - **Predictable growth**: capacity doubles below 64 slots, then grows by half, up to a configurable ceiling
//! - **Arbitrary removal**: [`PriorityQueue::remove_item`] removes one matching element in O(n)
//!
//! The queue is single-threaded; wrap it in a lock to share it.
//!
//! # Example
//!
//! ```rust
//! use array_priority_queue::{PriorityQueue, QueueError, ReverseOrder};
//!
//! let mut queue = PriorityQueue::with_comparator(ReverseOrder);
//! queue.offer(1).unwrap();
//! queue.offer(3).unwrap();
//! queue.offer(2).unwrap();
//!
//! assert_eq!(queue.peek(), Some(&3));
//! assert_eq!(queue.poll(), Some(3));
//! assert_eq!(queue.remove(), Ok(2));
//! assert_eq!(queue.remove(), Ok(1));
//! assert_eq!(queue.remove(), Err(QueueError::EmptyContainer));
//! ```

pub mod config;
pub mod error;
pub mod iter;
pub mod order;
pub mod priority_queue;
pub mod traits;

// Re-export the main types for convenience
pub use config::{HeapConfig, DEFAULT_INITIAL_CAPACITY, MAX_QUEUE_CAPACITY};
pub use error::{QueueError, Result};
pub use order::{Comparator, NaturalOrder, ReverseOrder};
pub use priority_queue::PriorityQueue;
pub use traits::Queue;
