//! The colored "person" records the queue is usually demonstrated with.
//!
//! A person carries a numeric key and a display color. Key validation lives
//! here, at the caller's side; the queues themselves accept any payload.
//!
//! # Examples
//!
//! ```
//! use fixed_queue::person::{Person, Rgb, MAX_KEY};
//! use fixed_queue::Queue;
//!
//! let mut queue = Queue::default();
//! let person = Person::new(42, Rgb::new(120, 200, 160)).unwrap();
//! queue.enqueue(person).unwrap();
//!
//! assert!(Person::new(MAX_KEY + 1, Rgb::new(0, 0, 0)).is_err());
//! assert_eq!(queue.peek().map(Person::key), Ok(42));
//! ```

use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// The largest key a person may carry.
pub const MAX_KEY: u16 = 999;

/// The number of people placed in a freshly filled queue.
pub const INITIAL_FILL: usize = 4;

/// A display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A random light color. Every channel is drawn from `100..254`.
    #[cfg(feature = "std")]
    pub fn random() -> Self {
        let channel = || crate::utils::random_in(100..254) as u8;
        Self::new(channel(), channel(), channel())
    }
}

/// A keyed, colored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Person {
    key: u16,
    color: Rgb,
}

impl Person {
    /// Create a person, rejecting keys above [`MAX_KEY`].
    pub fn new(key: u16, color: Rgb) -> Result<Self, KeyOutOfRange> {
        if key > MAX_KEY {
            return Err(KeyOutOfRange(key.into()));
        }
        Ok(Self { key, color })
    }

    /// Create a person with a random color.
    #[cfg(feature = "std")]
    pub fn with_random_color(key: u16) -> Result<Self, KeyOutOfRange> {
        Self::new(key, Rgb::random())
    }

    /// Parse a key as typed by a user, e.g. `"417"`.
    pub fn parse_key(input: &str) -> Result<u16, KeyOutOfRange> {
        let value: u32 = input.trim().parse().map_err(|_| KeyOutOfRange(u32::MAX))?;
        match u16::try_from(value) {
            Ok(key) if key <= MAX_KEY => Ok(key),
            _ => Err(KeyOutOfRange(value)),
        }
    }

    /// The person's key.
    pub fn key(&self) -> u16 {
        self.key
    }

    /// The person's display color.
    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// A key was not in `0..=MAX_KEY`.
///
/// Input that is not a number at all reports `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutOfRange(pub u32);

impl fmt::Display for KeyOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key must be a number between 0 and {MAX_KEY}")
    }
}

#[cfg(feature = "std")]
impl Error for KeyOutOfRange {}

/// An endless supply of people with random keys and colors.
///
/// Use with `take` and `refill` to populate a queue:
///
/// ```
/// use fixed_queue::person::{self, INITIAL_FILL};
/// use fixed_queue::Queue;
///
/// let mut queue = Queue::default();
/// queue.refill(person::sample().take(INITIAL_FILL)).unwrap();
/// assert_eq!(queue.len(), INITIAL_FILL);
/// assert_eq!(queue.front_index(), Some(0));
/// assert_eq!(queue.rear_index(), Some(INITIAL_FILL - 1));
/// ```
#[cfg(feature = "std")]
pub fn sample() -> impl Iterator<Item = Person> {
    core::iter::repeat_with(|| Person {
        key: crate::utils::random(u32::from(MAX_KEY)) as u16,
        color: Rgb::random(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_bounds() {
        let color = Rgb::new(100, 100, 100);
        assert!(Person::new(0, color).is_ok());
        assert!(Person::new(MAX_KEY, color).is_ok());
        assert_eq!(Person::new(1000, color), Err(KeyOutOfRange(1000)));
    }

    #[test]
    fn parse_key() {
        assert_eq!(Person::parse_key(" 417 "), Ok(417));
        assert_eq!(Person::parse_key("999"), Ok(999));
        assert_eq!(Person::parse_key("1000"), Err(KeyOutOfRange(1000)));
        assert_eq!(Person::parse_key("70000"), Err(KeyOutOfRange(70000)));
        assert_eq!(Person::parse_key("-3"), Err(KeyOutOfRange(u32::MAX)));
        assert_eq!(Person::parse_key("bob"), Err(KeyOutOfRange(u32::MAX)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn random_people_are_light_and_in_range() {
        for person in sample().take(200) {
            assert!(person.key() < MAX_KEY);
            let Rgb { r, g, b } = person.color();
            for channel in [r, g, b] {
                assert!((100..254).contains(&channel));
            }
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn random_color_keeps_key_check() {
        assert!(Person::with_random_color(5).is_ok());
        assert!(Person::with_random_color(MAX_KEY + 1).is_err());
    }
}
