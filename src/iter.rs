use core::fmt;
use core::iter::FusedIterator;

use crate::ring::{Indexes, Ring};

/// Borrowing iterator over the elements of a queue, oldest first.
///
/// Created by `iter` on [`ArrayQueue`][crate::ArrayQueue] and
/// [`Queue`][crate::Queue]. It reads slots only, so it can be cloned and
/// restarted freely.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    indexes: Indexes,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], ring: &Ring) -> Self {
        Self {
            slots,
            indexes: ring.indexes(slots.len()),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        self.indexes.next().and_then(|i| slots[i].as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indexes.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        self.indexes.next_back().and_then(|i| slots[i].as_ref())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            indexes: self.indexes.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
