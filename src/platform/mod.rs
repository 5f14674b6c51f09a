//! Platform abstraction layer
//!
//! Translates host input into simulation intents. Event capture itself
//! belongs to the host.

pub mod input;

pub use input::{KeyLookup, LEFT_KEYS, RIGHT_KEYS};
