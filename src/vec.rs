//! A fixed-capacity queue whose capacity is chosen at runtime.
//!
//! The slot storage is allocated once by [`Queue::new`] and never grows.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;
use core::fmt;
use core::iter::{self, FusedIterator};

use crate::iter::Iter;
use crate::ring::Ring;
use crate::{Full, QueueError, DEFAULT_CAPACITY};

/// A circular-array FIFO queue over a preallocated slot array.
///
/// # Examples
///
/// ```
/// use fixed_queue::Queue;
///
/// let mut queue = Queue::new(4);
/// for key in ['A', 'B', 'C', 'D'] {
///     queue.enqueue(key).unwrap();
/// }
/// assert!(queue.is_full());
///
/// assert_eq!(queue.dequeue(), Ok('A'));
/// queue.enqueue('E').unwrap();
/// assert_eq!(queue.rear_index(), Some(0));
///
/// let rest: String = queue.into_iter().collect();
/// assert_eq!(rest, "BCDE");
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    slots: Box<[Option<T>]>,
    ring: Ring,
}

impl<T> Queue<T> {
    /// Create an empty queue with `capacity` free slots.
    pub fn new(capacity: usize) -> Self {
        log::trace!("created queue with capacity {}", capacity);
        Self {
            slots: iter::repeat_with(|| None).take(capacity).collect(),
            ring: Ring::new(),
        }
    }

    /// Drop every element and return to the freshly constructed state.
    ///
    /// The capacity is kept and nothing is reallocated.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.ring = Ring::new();
        log::trace!("reset queue with capacity {}", self.capacity());
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
        log::trace!("refilled queue with {} elements", self.len());
        Ok(())
    }

    /// Append `item` after the current rear.
    ///
    /// Returns the item inside [`Full`] if every slot is occupied, leaving the
    /// queue untouched.
    pub fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        let cap = self.capacity();
        if self.ring.is_full(cap) {
            log::debug!("enqueue rejected, queue is full (capacity {})", cap);
            return Err(Full(item));
        }
        let slot = self.ring.push_back(cap);
        self.slots[slot] = Some(item);
        Ok(())
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.ring.is_empty() {
            log::debug!("dequeue rejected, queue is empty");
            return Err(QueueError::QueueEmpty);
        }
        let slot = self.ring.pop_front(self.capacity());
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
        self.ring.is_full(self.capacity())
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The number of elements in the queue.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// The maximum number of elements, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index of the oldest element, or `None` when empty.
    pub fn front_index(&self) -> Option<usize> {
        self.ring.front()
    }

    /// Slot index of the newest element, or `None` when empty.
    pub fn rear_index(&self) -> Option<usize> {
        self.ring.rear(self.capacity())
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

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Owning iterator that dequeues every element of a [`Queue`].
#[derive(Debug)]
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::format;

    #[test]
    fn smoke() {
        let mut queue = Queue::new(2);
        queue.enqueue("hello").unwrap();
        queue.enqueue("world").unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.dequeue(), Ok("hello"));
        assert_eq!(queue.dequeue(), Ok("world"));
        assert_eq!(queue.dequeue(), Err(QueueError::QueueEmpty));
    }

    #[test]
    fn default_capacity() {
        let queue: Queue<u16> = Queue::default();
        assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
        assert_eq!(queue.slots().len(), DEFAULT_CAPACITY);
        assert!(queue.slots().iter().all(Option::is_none));
    }

    #[test]
    fn reset_clears_slots() {
        let mut queue = Queue::new(3);
        queue.refill([1, 2, 3]).unwrap();
        queue.dequeue().unwrap();
        queue.reset();
        assert!(queue.is_empty());
        assert_eq!(queue.front_index(), None);
        assert_eq!(queue.rear_index(), None);
        assert!(queue.slots().iter().all(Option::is_none));

        queue.enqueue(4).unwrap();
        assert_eq!(queue.front_index(), Some(0));
        assert_eq!(queue.rear_index(), Some(0));
    }

    #[test]
    fn iter_is_restartable() {
        let mut queue = Queue::new(3);
        queue.refill([1, 2, 3]).unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(4).unwrap();

        let iter = queue.iter();
        assert!(iter.clone().eq(&[2, 3, 4]));
        assert!(iter.rev().eq(&[4, 3, 2]));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn debug() {
        let mut queue = Queue::new(4);
        queue.refill(["a", "b"]).unwrap();
        assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);
        assert_eq!(format!("{:?}", queue.iter()), r#"["a", "b"]"#);
    }
}
