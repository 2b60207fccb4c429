//! A fixed-capacity queue stored inline, with the capacity chosen at
//! compile time.
//!
//! [`ArrayQueue`] needs no allocator and is available without the `alloc`
//! feature. See [`crate::vec`] for a queue whose capacity is picked at runtime.

use core::fmt;
use core::iter::FusedIterator;

use crate::iter::Iter;
use crate::ring::Ring;
use crate::{Full, QueueError};

/// A circular-array FIFO queue holding at most `N` elements.
///
/// # Examples
///
/// ```
/// use fixed_queue::{ArrayQueue, QueueError};
///
/// let mut queue: ArrayQueue<&str, 2> = ArrayQueue::new();
/// queue.enqueue("a").unwrap();
/// queue.enqueue("b").unwrap();
/// assert!(queue.enqueue("c").is_err());
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert_eq!(queue.dequeue(), Err(QueueError::QueueEmpty));
/// ```
#[derive(Clone)]
pub struct ArrayQueue<T, const N: usize> {
    slots: [Option<T>; N],
    ring: Ring,
}

impl<T, const N: usize> ArrayQueue<T, N> {
    /// Create an empty queue with `N` free slots.
    pub fn new() -> Self {
        log::trace!("created array queue with capacity {}", N);
        Self {
            slots: core::array::from_fn(|_| None),
            ring: Ring::new(),
        }
    }

    /// Drop every element and return to the freshly constructed state.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.ring = Ring::new();
        log::trace!("reset array queue with capacity {}", N);
    }

    /// Reset the queue, then enqueue `items` in order starting at slot `0`.
    ///
    /// Stops with [`QueueError::CapacityExceeded`] at the first item that
    /// does not fit; the items inserted before it stay in the queue.
    pub fn refill<I>(&mut self, items: I) -> Result<(), QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        self.reset();
        for item in items {
            self.enqueue(item)?;
        }
        log::trace!("refilled array queue with {} elements", self.len());
        Ok(())
    }

    /// Append `item` after the current rear.
    ///
    /// Returns the item inside [`Full`] if every slot is occupied, leaving the
    /// queue untouched.
    pub fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        if self.ring.is_full(N) {
            log::debug!("enqueue rejected, queue is full (capacity {})", N);
            return Err(Full(item));
        }
        let slot = self.ring.push_back(N);
        self.slots[slot] = Some(item);
        Ok(())
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.ring.is_empty() {
            log::debug!("dequeue rejected, queue is empty");
            return Err(QueueError::QueueEmpty);
        }
        let slot = self.ring.pop_front(N);
        self.slots[slot].take().ok_or(QueueError::QueueEmpty)
    }

    /// Borrow the oldest element without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.ring
            .front()
            .and_then(|slot| self.slots[slot].as_ref())
            .ok_or(QueueError::QueueEmpty)
    }

    /// Returns `true` if no further element can be enqueued.
    pub fn is_full(&self) -> bool {
        self.ring.is_full(N)
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The number of elements in the queue.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// The maximum number of elements, `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot index of the oldest element, or `None` when empty.
    pub fn front_index(&self) -> Option<usize> {
        self.ring.front()
    }

    /// Slot index of the newest element, or `None` when empty.
    pub fn rear_index(&self) -> Option<usize> {
        self.ring.rear(N)
    }

    /// Every slot in storage order, including the empty ones.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterate over the elements from front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, &self.ring)
    }
}

impl<T, const N: usize> Default for ArrayQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ArrayQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> IntoIterator for ArrayQueue<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Owning iterator that dequeues every element of an [`ArrayQueue`].
#[derive(Debug)]
pub struct IntoIter<T, const N: usize> {
    queue: ArrayQueue<T, N>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
