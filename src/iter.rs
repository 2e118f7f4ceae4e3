//! Iterators over a [`PriorityQueue`](crate::PriorityQueue) in storage order

use std::iter::FusedIterator;
use std::{fmt, slice, vec};

/// A borrowing iterator over the elements of a `PriorityQueue`.
///
/// Created by [`PriorityQueue::iter`](crate::PriorityQueue::iter). Elements
/// come out in level order, which is not sorted order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    iter: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(iter: slice::Iter<'a, T>) -> Self {
        Self { iter }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `PriorityQueue`.
///
/// Created by `PriorityQueue::into_iter`. Elements come out in level order.
/// Use [`into_sorted_vec`](crate::PriorityQueue::into_sorted_vec) for
/// priority order.
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(iter: vec::IntoIter<T>) -> Self {
        Self { iter }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
