//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use array_priority_queue::{Comparator, HeapConfig, NaturalOrder, PriorityQueue, ReverseOrder};
use proptest::prelude::*;

/// Check the level-order heap property for every occupied slot
fn check_heap_property<C: Comparator<i32>>(
    queue: &PriorityQueue<i32, C>,
) -> Result<(), TestCaseError> {
    let data = queue.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        prop_assert!(
            !queue.comparator().precedes(&data[i], &data[parent]),
            "slot {} ({}) precedes parent slot {} ({}) in {:?}",
            i,
            data[i],
            parent,
            data[parent],
            data
        );
    }
    Ok(())
}

/// Apply a random mix of offers, polls and removals, checking the
/// invariant and the length against a plain vector model after each step
fn test_mixed_ops_invariant<C: Comparator<i32>>(
    comparator: C,
    initial_capacity: usize,
    ops: Vec<(u8, i32)>,
) -> Result<(), TestCaseError> {
    let config = HeapConfig::with_initial_capacity(initial_capacity);
    let mut queue = PriorityQueue::with_config(&config, comparator).unwrap();
    let mut model: Vec<i32> = Vec::new();

    for (op, value) in ops {
        match op % 4 {
            0 | 1 => {
                queue.offer(value).unwrap();
                model.push(value);
            }
            2 => {
                let polled = queue.poll();
                if model.is_empty() {
                    prop_assert_eq!(polled, None);
                } else {
                    let polled = polled.unwrap();
                    // Nothing left in the model may precede what was polled
                    for other in &model {
                        prop_assert!(!queue.comparator().precedes(other, &polled));
                    }
                    let pos = model.iter().position(|&v| v == polled).unwrap();
                    model.swap_remove(pos);
                }
            }
            _ => {
                if model.is_empty() {
                    prop_assert!(queue.remove_item(&value).is_err());
                } else {
                    let removed = queue.remove_item(&value).unwrap();
                    let pos = model.iter().position(|&v| v == value);
                    prop_assert_eq!(removed, pos.is_some());
                    if let Some(pos) = pos {
                        model.swap_remove(pos);
                    }
                }
            }
        }

        prop_assert_eq!(queue.len(), model.len());
        prop_assert!(queue.capacity() >= queue.len());
        check_heap_property(&queue)?;
    }

    Ok(())
}

/// Test that polling everything matches a reference sort
fn test_extraction_matches_sort(values: Vec<i32>, reverse: bool) -> Result<(), TestCaseError> {
    let mut expected = values.clone();
    expected.sort_unstable();

    let polled = if reverse {
        expected.reverse();
        let mut queue = PriorityQueue::with_comparator(ReverseOrder);
        for v in &values {
            queue.offer(*v).unwrap();
        }
        std::iter::from_fn(|| queue.poll()).collect::<Vec<_>>()
    } else {
        let mut queue = PriorityQueue::new();
        for v in &values {
            queue.offer(*v).unwrap();
        }
        std::iter::from_fn(|| queue.poll()).collect::<Vec<_>>()
    };

    prop_assert_eq!(polled, expected);
    Ok(())
}

/// Test that storage-order iteration visits a permutation of the contents
fn test_iter_is_permutation(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new();
    for v in &values {
        queue.offer(*v).unwrap();
    }

    let mut seen: Vec<i32> = queue.iter().copied().collect();
    let mut expected = values;
    seen.sort_unstable();
    expected.sort_unstable();
    prop_assert_eq!(seen, expected);
    Ok(())
}

/// Test that removing by value takes exactly one occurrence
fn test_remove_item_single_occurrence(values: Vec<i32>, pick: usize) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new();
    for v in &values {
        queue.offer(*v).unwrap();
    }

    let target = values[pick % values.len()];
    let before = values.iter().filter(|&&v| v == target).count();

    prop_assert_eq!(queue.remove_item(&target), Ok(true));
    prop_assert_eq!(queue.len(), values.len() - 1);
    let after = queue.iter().filter(|&&v| v == target).count();
    prop_assert_eq!(after, before - 1);
    check_heap_property(&queue)?;
    Ok(())
}

proptest! {
    #[test]
    fn test_natural_mixed_ops_invariant(
        capacity in 1usize..16,
        ops in prop::collection::vec((any::<u8>(), -50i32..50), 0..200)
    ) {
        test_mixed_ops_invariant(NaturalOrder, capacity, ops)?;
    }

    #[test]
    fn test_reverse_mixed_ops_invariant(
        capacity in 1usize..16,
        ops in prop::collection::vec((any::<u8>(), -50i32..50), 0..200)
    ) {
        test_mixed_ops_invariant(ReverseOrder, capacity, ops)?;
    }

    #[test]
    fn test_closure_mixed_ops_invariant(
        ops in prop::collection::vec((any::<u8>(), -50i32..50), 0..200)
    ) {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        test_mixed_ops_invariant(by_abs, 1, ops)?;
    }

    #[test]
    fn test_natural_extraction_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_extraction_matches_sort(values, false)?;
    }

    #[test]
    fn test_reverse_extraction_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_extraction_matches_sort(values, true)?;
    }

    #[test]
    fn test_iteration_permutation(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_iter_is_permutation(values)?;
    }

    #[test]
    fn test_remove_item_removes_one(
        values in prop::collection::vec(-5i32..5, 1..60),
        pick in any::<usize>()
    ) {
        test_remove_item_single_occurrence(values, pick)?;
    }
}
