//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - System time source for unseeded builds

mod clock;

pub use clock::SystemClock;
