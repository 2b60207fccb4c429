use core::ops;

/// Wrap-around cursor over a slot array of fixed capacity.
///
/// Only `front` and `len` are stored. The rear slot is derived from them, so
/// an empty ring has no rear at all instead of a `-1` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ring {
    front: usize,
    len: usize,
}

impl Ring {
    pub(crate) const fn new() -> Self {
        Self { front: 0, len: 0 }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) const fn is_full(&self, cap: usize) -> bool {
        self.len == cap
    }

    /// Index of the oldest element, if any.
    pub(crate) const fn front(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.front)
        }
    }

    /// Index of the newest element, if any.
    pub(crate) fn rear(&self, cap: usize) -> Option<usize> {
        match self.len {
            0 => None,
            len => Some(wrap(self.front + len - 1, cap)),
        }
    }

    /// Claim the slot after the current rear. The caller must have checked
    /// that the ring is not full.
    pub(crate) fn push_back(&mut self, cap: usize) -> usize {
        debug_assert!(self.len < cap, "ring is full");
        let slot = wrap(self.front + self.len, cap);
        self.len += 1;
        slot
    }

    /// Release the front slot. The caller must have checked that the ring is
    /// not empty.
    pub(crate) fn pop_front(&mut self, cap: usize) -> usize {
        debug_assert!(self.len > 0, "ring is empty");
        let slot = self.front;
        self.front = wrap(self.front + 1, cap);
        self.len -= 1;
        slot
    }

    /// Slot indexes of the live window, front to rear.
    pub(crate) fn indexes(&self, cap: usize) -> Indexes {
        Indexes {
            iter: 0..self.len,
            front: self.front,
            cap,
        }
    }
}

#[inline]
fn wrap(index: usize, cap: usize) -> usize {
    // `cap` is only zero for a ring that can never hold anything.
    if cap == 0 {
        0
    } else {
        index.wrapping_rem(cap)
    }
}

/// Maps logical positions `0..len` onto slot indexes.
#[derive(Debug, Clone)]
pub(crate) struct Indexes {
    iter: ops::Range<usize>,
    front: usize,
    cap: usize,
}

impl Iterator for Indexes {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pos| wrap(pos + self.front, self.cap))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Indexes {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter
            .next_back()
            .map(|pos| wrap(pos + self.front, self.cap))
    }
}

impl ExactSizeIterator for Indexes {}
