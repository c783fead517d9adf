//! Monotonic time abstraction for frame and tick timing.

/// A millisecond-resolution instant from a monotonic source.
///
/// The zero point is arbitrary (boot, process start, host epoch); only
/// differences between instants are meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(u64);

impl Millis {
    /// The source's zero point.
    pub const ZERO: Self = Millis(0);

    /// Creates an instant from raw milliseconds.
    pub const fn new(ms: u64) -> Self {
        Millis(ms)
    }

    /// Raw millisecond value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero when the
    /// instants are out of order.
    pub const fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This instant shifted `ms` into the future.
    pub const fn after(self, ms: u64) -> Millis {
        Millis(self.0.saturating_add(ms))
    }
}

/// Trait for the host's monotonic clock.
///
/// Implement this for your timing system. The face only ever asks for "now";
/// all deadlines are handed back to the host as plain delays.
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&self) -> Millis;
}

#[cfg(feature = "std")]
mod std_source {
    use super::{Millis, TimeSource};

    /// [`TimeSource`] backed by `std::time::Instant`, anchored at creation.
    #[derive(Debug)]
    pub struct StdTimeSource {
        origin: std::time::Instant,
    }

    impl StdTimeSource {
        /// Creates a source whose zero point is now.
        pub fn new() -> Self {
            Self {
                origin: std::time::Instant::now(),
            }
        }
    }

    impl Default for StdTimeSource {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TimeSource for StdTimeSource {
        fn now(&self) -> Millis {
            Millis::new(self.origin.elapsed().as_millis() as u64)
        }
    }
}

#[cfg(feature = "std")]
pub use std_source::StdTimeSource;
