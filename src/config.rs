//! Capacity configuration for [`PriorityQueue`](crate::PriorityQueue).

use crate::error::{QueueError, Result};
use serde::{Deserialize, Serialize};

/// Capacity used when none is given, and the capacity a queue returns to on `clear`.
pub const DEFAULT_INITIAL_CAPACITY: usize = 11;

/// Hard ceiling on queue capacity.
///
/// Kept a little below `i32::MAX` so that growth always has headroom beneath
/// the largest array a platform will hand out.
pub const MAX_QUEUE_CAPACITY: usize = i32::MAX as usize - 8;

/// Sizing parameters for a priority queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Number of slots allocated up front. Must be at least 1.
    pub initial_capacity: usize,
    /// Capacity beyond which growth fails with `CapacityExceeded`.
    pub max_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: MAX_QUEUE_CAPACITY,
        }
    }
}

impl HeapConfig {
    /// Configuration with the given initial capacity and the default ceiling.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Checks that the capacities are usable.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfiguration`] if `initial_capacity` is zero
    /// or larger than `max_capacity`, or if `max_capacity` is above
    /// [`MAX_QUEUE_CAPACITY`].
    pub fn validate(&self) -> Result<()> {
        if self.max_capacity == 0 || self.max_capacity > MAX_QUEUE_CAPACITY {
            return Err(QueueError::InvalidConfiguration {
                capacity: self.max_capacity,
                max: MAX_QUEUE_CAPACITY,
            });
        }
        if self.initial_capacity < 1 || self.initial_capacity > self.max_capacity {
            return Err(QueueError::InvalidConfiguration {
                capacity: self.initial_capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}
