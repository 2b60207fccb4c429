//! Fixed-capacity FIFO queues over a circular array.
//!
//! A queue preallocates all of its slots up front. Elements are appended at
//! the rear and removed from the front, and both positions wrap from the last
//! slot back to slot `0`. Nothing is ever reallocated or shifted.
//!
//! # Queues
//!
//! - [`ArrayQueue`]: capacity fixed at compile time, stored inline. Works
//!   without an allocator.
//! - [`Queue`]: capacity chosen at runtime, stored in a boxed slice. Requires
//!   the `alloc` feature.
//!
//! Both offer the same operations: `enqueue`, `dequeue`, `peek`, `reset`,
//! `refill`, `is_full`, `is_empty`, `len`, and FIFO-order iteration. The
//! `front_index`, `rear_index` and `slots` accessors expose the raw layout
//! for code that wants to draw the array and its front/rear pointers.
//!
//! # Examples
//!
//! ```rust
//! use fixed_queue::{Queue, QueueError};
//!
//! let mut queue = Queue::new(4);
//! for c in ['A', 'B', 'C', 'D'] {
//!     queue.enqueue(c).unwrap();
//! }
//! assert_eq!(queue.enqueue('X').unwrap_err().into_inner(), 'X');
//!
//! assert_eq!(queue.dequeue(), Ok('A'));
//! queue.enqueue('E').unwrap();
//! assert!(queue.iter().eq(&['B', 'C', 'D', 'E']));
//!
//! queue.reset();
//! assert_eq!(queue.peek(), Err(QueueError::QueueEmpty));
//! ```
//!
//! # Concurrency
//!
//! The queues perform no internal synchronization and never block. To share
//! one across threads, wrap it in a single lock such as
//! `std::sync::Mutex<Queue<T>>`.
//!
//! # Logging
//!
//! Resets, refills and rejected operations are reported through the [`log`]
//! facade at `trace` and `debug` level. No logger is installed by this crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod iter;
mod ring;
mod utils;

pub mod array;
pub mod person;
#[cfg(feature = "alloc")]
pub mod vec;

pub use array::ArrayQueue;
pub use error::{Full, QueueError};
pub use iter::Iter;
#[cfg(feature = "alloc")]
pub use vec::Queue;

/// The capacity of a [`Queue`] built with `Default`.
pub const DEFAULT_CAPACITY: usize = 10;
