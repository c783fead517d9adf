#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`WatchFace`**: one face session owning the digit slots, beam curtains, progress bar and minute timeline
//! - **`SlotSequence`** / **`Stage`**: a declarative chain of linear motions for one slot value
//! - **`SlotSequencer`**: drives a slot through a sequence; starting a new one supersedes the old
//! - **`Choreography`**: tunable durations and delays of the minute-rollover burst
//! - **`TickScheduler`**: paces the once-per-second update while the face is interactive
//! - **`WallClock`** / **`ClockSample`**: calendar time in the device's current zone
//! - **`TimeSource`** / **`Millis`**: monotonic milliseconds for frame timing
//! - **`RenderSink`**: trait to implement for your drawing surface
//! - **`FontMetrics`** / **`Layout`**: measured glyph advances and the derived pixel placement
//!
//! All drawing uses `palette::Srgb` (0.0-1.0 range) colors. Concealed digits
//! are painted in [`COLOR_BACKGROUND`] so the value swap happens while the
//! glyph is off-screen.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod clock;
pub mod face;
pub mod layout;
pub mod render;
pub mod rollover;
pub mod scheduler;
pub mod sequence;
pub mod sequencer;
pub mod time;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{ClockSample, WallClock, Weekday};
pub use face::{BeamSlot, Choreography, DigitSlot, WatchFace};
pub use layout::{FontMetrics, Layout, NUM_DIGITS, Rect};
pub use render::{RenderSink, TextRole};
pub use rollover::digits_that_will_change;
pub use scheduler::{TICK_PERIOD_MS, TickScheduler};
pub use sequence::{MAX_STAGES, SequenceBuilder, SequenceError, SlotSequence, Stage};
pub use sequencer::{ServiceTiming, SlotSequencer};
#[cfg(feature = "std")]
pub use time::StdTimeSource;
pub use time::{Millis, TimeSource};

/// Color of the time glyphs, beam curtains and progress bar.
pub const COLOR_TIME: Srgb = Srgb::new(1.0, 1.0, 1.0);

/// Slightly dimmed color of the date line.
pub const COLOR_DATE: Srgb = Srgb::new(0.78, 0.78, 0.78);

/// Background fill; concealed digits are painted with it.
pub const COLOR_BACKGROUND: Srgb = Srgb::new(0.0, 0.0, 0.0);
