use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// The ways a queue operation can be rejected.
///
/// A rejected operation never changes the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// Enqueue was called while every slot was occupied.
    CapacityExceeded,
    /// Dequeue or peek was called on a queue with no elements.
    QueueEmpty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("queue is full"),
            Self::QueueEmpty => f.write_str("queue is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl Error for QueueError {}

/// An item that could not be enqueued because the queue was full.
///
/// The rejected item is handed back so the caller keeps ownership of it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the rejected item.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// The error kind, always [`QueueError::CapacityExceeded`].
    pub const fn kind(&self) -> QueueError {
        QueueError::CapacityExceeded
    }
}

// Payloads need not be `Debug`, so only the kind is shown.
impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Full").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind(), f)
    }
}

impl<T> From<Full<T>> for QueueError {
    fn from(_: Full<T>) -> Self {
        QueueError::CapacityExceeded
    }
}

#[cfg(feature = "std")]
impl<T> Error for Full<T> {}
