//! Ordering policies for priority queues
//!
//! Every comparison a [`PriorityQueue`](crate::PriorityQueue) makes goes through a
//! [`Comparator`]. The comparator is a type parameter of the queue, so the
//! choice between the element's own ordering and a supplied one is made once,
//! when the queue is constructed.
//!
//! - [`NaturalOrder`] delegates to the element's [`Ord`] implementation (min-heap).
//! - [`ReverseOrder`] flips it (max-heap).
//! - Any closure `Fn(&T, &T) -> Ordering` is itself a comparator.
//!
//! # Example
//!
//! ```rust
//! use array_priority_queue::PriorityQueue;
//!
//! // Order by distance from zero instead of by value
//! let mut queue = PriorityQueue::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
//! queue.offer(-7).unwrap();
//! queue.offer(2).unwrap();
//! queue.offer(-3).unwrap();
//!
//! assert_eq!(queue.poll(), Some(2));
//! assert_eq!(queue.poll(), Some(-3));
//! assert_eq!(queue.poll(), Some(-7));
//! ```

use std::cmp::Ordering;

/// A total order over `T` used to prioritise queue elements.
///
/// Elements that compare [`Ordering::Less`] have higher priority and are
/// polled first.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` strictly precedes `b`
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Orders elements by their [`Ord`] implementation, smallest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by the reverse of their [`Ord`] implementation, largest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: ?Sized + Ord> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
