//! Kani verification proofs for priority queue operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use array_priority_queue::{PriorityQueue, QueueError};

/// Proof that offer always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_offer_increments_len() {
    let mut queue: PriorityQueue<u32> = PriorityQueue::with_capacity(1).unwrap();
    queue.offer(kani::any()).unwrap();
    let initial_len = queue.len();

    queue.offer(kani::any()).unwrap();

    // Post-condition: length must increase by exactly 1, growing past capacity 1
    assert!(queue.len() == initial_len + 1);
    assert!(queue.capacity() == 2);
}

/// Proof that a rejected absent element leaves the queue untouched
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_null_rejection_keeps_len() {
    let mut queue: PriorityQueue<u32> = PriorityQueue::new();
    queue.offer(kani::any()).unwrap();

    assert!(queue.offer_option(None) == Err(QueueError::NullElementRejected));
    assert!(queue.len() == 1);
}

/// Proof that peek returns the minimum of three arbitrary elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_peek_is_minimum() {
    let mut queue: PriorityQueue<u32> = PriorityQueue::new();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();

    queue.offer(a).unwrap();
    queue.offer(b).unwrap();
    queue.offer(c).unwrap();

    let min = a.min(b).min(c);
    assert!(queue.peek() == Some(&min));
}

/// Proof that polling yields non-decreasing values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_poll_order() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::new();
    for _ in 0..4 {
        queue.offer(kani::any()).unwrap();
    }

    let mut last = 0u8;
    while let Some(value) = queue.poll() {
        assert!(value >= last);
        last = value;
    }
    assert!(queue.is_empty());
}

/// Proof that removing an absent value is a no-op
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_remove_missing_is_noop() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let missing: u8 = kani::any();
    kani::assume(missing != a && missing != b);

    queue.offer(a).unwrap();
    queue.offer(b).unwrap();

    assert!(queue.remove_item(&missing) == Ok(false));
    assert!(queue.len() == 2);
}
