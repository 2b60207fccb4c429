//! Utilities shared by the modules of this crate.

#[cfg(feature = "std")]
mod rng;

#[cfg(feature = "std")]
pub(crate) use rng::{random, random_in};
