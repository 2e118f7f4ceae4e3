//! Array-backed binary heap priority queue
//!
//! [`PriorityQueue`] keeps a complete binary tree in a flat vector in level
//! order: the children of slot `i` live at `2i + 1` and `2i + 2`, its parent at
//! `(i - 1) / 2`. The slot at index 0 always holds the element that sorts first
//! under the queue's [`Comparator`].
//!
//! # Time Complexity
//!
//! | Operation     | Complexity     |
//! |---------------|----------------|
//! | `offer`       | O(log n) amortized |
//! | `poll`        | O(log n)       |
//! | `peek`        | O(1)           |
//! | `remove_item` | O(n)           |
//! | `contains`    | O(n)           |
//!
//! # Example
//!
//! ```rust
//! use array_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     queue.offer(value).unwrap();
//! }
//!
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.len(), 6);
//! assert_eq!(queue.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::{HeapConfig, DEFAULT_INITIAL_CAPACITY, MAX_QUEUE_CAPACITY};
use crate::error::{QueueError, Result};
use crate::iter::{IntoIter, Iter};
use crate::order::{Comparator, NaturalOrder};
use crate::traits::Queue;

/// A binary min-heap over a growable array
///
/// Elements are ordered by the comparator `C`, which defaults to the
/// element's own [`Ord`] implementation. Equal elements come out in an
/// unspecified order.
///
/// The queue tracks a logical capacity separately from the vector's. It
/// doubles while below 64 slots and grows by half after that, never past
/// [`max_capacity`](PriorityQueue::max_capacity).
#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    /// Heap elements in level order; occupied slots are exactly `0..data.len()`
    data: Vec<T>,
    capacity: usize,
    max_capacity: usize,
    comparator: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue ordered by `T`'s [`Ord`] implementation
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty naturally-ordered queue with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfiguration`] if `capacity` is zero or
    /// above [`MAX_QUEUE_CAPACITY`], and [`QueueError::CapacityExceeded`] if
    /// the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue that orders elements with `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_parts(DEFAULT_INITIAL_CAPACITY, MAX_QUEUE_CAPACITY, comparator)
    }

    /// Creates an empty queue with the given capacity and comparator
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfiguration`] if `capacity` is zero or
    /// above [`MAX_QUEUE_CAPACITY`], and [`QueueError::CapacityExceeded`] if
    /// the storage cannot be allocated.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self> {
        Self::with_config(&HeapConfig::with_initial_capacity(capacity), comparator)
    }

    /// Creates an empty queue sized by `config`
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfiguration`] if the configuration does
    /// not [`validate`](HeapConfig::validate), or
    /// [`QueueError::CapacityExceeded`] if storage for `initial_capacity`
    /// elements cannot be allocated.
    pub fn with_config(config: &HeapConfig, comparator: C) -> Result<Self> {
        config.validate()?;

        let mut data = Vec::new();
        reserve_slots(&mut data, config.initial_capacity, config.max_capacity)?;
        Ok(Self {
            data,
            capacity: config.initial_capacity,
            max_capacity: config.max_capacity,
            comparator,
        })
    }

    fn from_parts(capacity: usize, max_capacity: usize, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            max_capacity,
            comparator,
        }
    }

    /// Inserts an element, growing the storage if it is full
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityExceeded`] if the queue is full and
    /// growing would pass its maximum capacity. The queue is unchanged.
    pub fn offer(&mut self, item: T) -> Result<()> {
        if self.data.len() >= self.capacity {
            self.grow()?;
        }

        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Alias for [`offer`](PriorityQueue::offer)
    ///
    /// # Errors
    /// Same as [`offer`](PriorityQueue::offer).
    pub fn add(&mut self, item: T) -> Result<()> {
        self.offer(item)
    }

    /// Inserts a possibly absent element
    ///
    /// # Errors
    /// Returns [`QueueError::NullElementRejected`] for `None`, leaving the
    /// queue untouched; otherwise the same as [`offer`](PriorityQueue::offer).
    pub fn offer_option(&mut self, item: Option<T>) -> Result<()> {
        match item {
            Some(item) => self.offer(item),
            None => Err(QueueError::NullElementRejected),
        }
    }

    /// Removes and returns the first element, or `None` if the queue is empty
    pub fn poll(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes and returns the first element
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    pub fn remove(&mut self) -> Result<T> {
        self.poll().ok_or(QueueError::EmptyContainer)
    }

    /// Removes one element equal to `item`, if there is one
    ///
    /// Slots are searched in storage order, so when several elements are equal
    /// it is unspecified which of them goes. Returns whether anything was removed.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    pub fn remove_item(&mut self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(QueueError::EmptyContainer);
        }

        let removed = self.position(item).and_then(|index| self.remove_at(index));
        Ok(removed.is_some())
    }

    /// Consumes the queue, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.poll() {
            sorted.push(item);
        }
        sorted
    }

    /// Removes the element at `index` and restores the heap property
    ///
    /// The last element is moved into the vacated slot and sifted down. If it
    /// stays put it may still be smaller than its new parent (when `index` is
    /// not the root), so it is then sifted up instead. An index outside the
    /// occupied slots is the not-found case and leaves the queue unchanged.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }

        let removed = self.data.swap_remove(index);

        if index < self.data.len() && self.sift_down(index) == index {
            self.sift_up(index);
        }

        Some(removed)
    }

    /// Grows the logical capacity, doubling small queues and adding half to large ones
    fn grow(&mut self) -> Result<()> {
        debug_assert_eq!(self.data.len(), self.capacity, "grow before queue is full");
        let old_capacity = self.capacity;
        let new_capacity = if old_capacity < 64 {
            old_capacity.checked_mul(2)
        } else {
            old_capacity.checked_add(old_capacity / 2)
        };

        let new_capacity = match new_capacity {
            Some(capacity) if capacity <= self.max_capacity => capacity,
            requested => {
                let requested = requested.unwrap_or(usize::MAX);
                log::debug!(
                    "refusing to grow priority queue from {} to {} slots (max {})",
                    old_capacity,
                    requested,
                    self.max_capacity
                );
                return Err(QueueError::CapacityExceeded {
                    requested,
                    max: self.max_capacity,
                });
            }
        };

        reserve_slots(&mut self.data, new_capacity, self.max_capacity)?;
        self.capacity = new_capacity;
        log::trace!(
            "grew priority queue from {} to {} slots",
            old_capacity,
            new_capacity
        );
        Ok(())
    }

    /// Move element at index up to maintain heap property, returning where it settled
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.comparator.precedes(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property, returning where it settled
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        debug_assert!(index < len, "sift_down from unoccupied slot {}", index);

        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.comparator.precedes(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.comparator.precedes(&self.data[right], &self.data[smallest])
            {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        index
    }
}

/// Ensures `data` can hold `capacity` elements without reallocating
///
/// Allocation failure is reported as [`QueueError::CapacityExceeded`] and
/// leaves `data` untouched.
fn reserve_slots<T>(data: &mut Vec<T>, capacity: usize, max: usize) -> Result<()> {
    data.try_reserve_exact(capacity.saturating_sub(data.len()))
        .map_err(|err| {
            log::debug!(
                "failed to allocate {} priority queue slots: {}",
                capacity,
                err
            );
            QueueError::CapacityExceeded {
                requested: capacity,
                max,
            }
        })
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots available before the queue next grows
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the capacity the queue will never grow past
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns the comparator that orders this queue
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the first element without removing it, or `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the first element without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    pub fn element(&self) -> Result<&T> {
        self.peek().ok_or(QueueError::EmptyContainer)
    }

    /// Returns true if an element equal to `item` is in the queue
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(item).is_some()
    }

    /// Returns the storage slot of the first element equal to `item`
    ///
    /// The scan runs in storage order, not priority order. The same object
    /// matches by identity before `PartialEq` is consulted.
    pub fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data
            .iter()
            .position(|candidate| std::ptr::eq(candidate, item) || candidate == item)
    }

    /// Removes every element and shrinks the storage back to the default capacity
    pub fn clear(&mut self) {
        let capacity = DEFAULT_INITIAL_CAPACITY.min(self.max_capacity);
        log::trace!(
            "clearing priority queue of {} elements, capacity {} -> {}",
            self.data.len(),
            self.capacity,
            capacity
        );
        self.data = Vec::with_capacity(capacity);
        self.capacity = capacity;
    }

    /// Returns an iterator over the elements in storage (level) order
    ///
    /// This is not priority order; only the first element is guaranteed to
    /// be the minimum.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.iter())
    }

    /// Returns the occupied slots in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the queue, returning its elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Comparator<T>> Queue<T> for PriorityQueue<T, C> {
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn offer(&mut self, item: T) -> Result<()> {
        PriorityQueue::offer(self, item)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn poll(&mut self) -> Option<T> {
        PriorityQueue::poll(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the queue, yielding elements in storage order
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.data.into_iter())
    }
}

/// Positional equality: same comparator and the same element in every slot.
///
/// Two queues holding the same multiset can compare unequal if their
/// insertion histories left the elements in different slots.
impl<T: PartialEq, C: PartialEq> PartialEq for PriorityQueue<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.comparator == other.comparator
    }
}

impl<T: Eq, C: Eq> Eq for PriorityQueue<T, C> {}

impl<T: Hash, C: Hash> Hash for PriorityQueue<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparator.hash(state);
        self.data.hash(state);
    }
}

impl<T: fmt::Display, C> fmt::Display for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
