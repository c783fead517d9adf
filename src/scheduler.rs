//! Per-second tick pacing while the face is interactive.

use crate::clock::ClockSample;

/// Wall-clock tick period.
pub const TICK_PERIOD_MS: u64 = 1_000;

/// Gates and paces the once-per-second update.
///
/// The scheduler owns no timer: it decides whether a tick should be pending
/// and how long until the next wall second boundary, and the host schedules
/// the actual one-shot callback. A tick can never double-fire because the
/// next one is armed only after the current transition has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickScheduler {
    visible: bool,
    ambient: bool,
    armed: bool,
}

impl TickScheduler {
    /// Creates a scheduler for a face that is not yet visible.
    pub fn new() -> Self {
        Self {
            visible: false,
            ambient: false,
            armed: false,
        }
    }

    /// Visible and not in a reduced display mode.
    pub fn is_interactive(&self) -> bool {
        self.visible && !self.ambient
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_ambient(&mut self, ambient: bool) {
        self.ambient = ambient;
    }

    /// Arms the next tick: returns the delay until the next wall second
    /// boundary, or `None` (disarmed) while not interactive.
    ///
    /// Deriving the delay from the current sub-second phase on every firing
    /// pins ticks to wall boundaries with no cumulative drift.
    pub fn rearm(&mut self, sample: &ClockSample) -> Option<u64> {
        if !self.is_interactive() {
            self.armed = false;
            return None;
        }
        self.armed = true;
        Some(TICK_PERIOD_MS - u64::from(sample.millis_of_second) % TICK_PERIOD_MS)
    }

    /// Cancels the pending tick.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Whether a tick is pending.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Nearest preceding quarter-minute boundary, used to resynchronize the
    /// displayed phase after reactivation.
    pub fn resync_second(second: u8) -> u8 {
        second - second % 15
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
