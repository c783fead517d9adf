//! Per-slot animation driving: state, cancellation and service timing.

use crate::sequence::SlotSequence;
use crate::time::Millis;

/// When a sequencer (or the whole face) next needs servicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming {
    /// A stage is in motion. Service again at your desired frame rate.
    ///
    /// Typically you should sleep for 16-33ms (30-60 FPS) between calls.
    Continuous,
    /// Holding in a delay. Service again after this many milliseconds.
    Delay(u64),
    /// Nothing scheduled. No servicing needed until a new sequence starts.
    Idle,
}

impl ServiceTiming {
    /// Combines two hints: motion dominates, otherwise the nearer deadline.
    pub fn merge(self, other: ServiceTiming) -> ServiceTiming {
        use ServiceTiming::*;
        match (self, other) {
            (Continuous, _) | (_, Continuous) => Continuous,
            (Delay(a), Delay(b)) => Delay(a.min(b)),
            (Delay(a), Idle) | (Idle, Delay(a)) => Delay(a),
            (Idle, Idle) => Idle,
        }
    }
}

/// Drives one slot's observable value through staged sequences.
///
/// Starting a new sequence supersedes any in-flight one immediately; the
/// discarded sequence gets no completion of any kind.
#[derive(Debug)]
pub struct SlotSequencer {
    sequence: Option<SlotSequence>,
    started_at: Millis,
    value: i32,
    concealed: bool,
}

impl SlotSequencer {
    /// Creates an idle sequencer resting at `value`.
    pub fn new(value: i32) -> Self {
        Self {
            sequence: None,
            started_at: Millis::ZERO,
            value,
            concealed: false,
        }
    }

    /// Starts `sequence` at `now`, cancelling any in-flight sequence.
    ///
    /// The observable value snaps to the new sequence's start value at once;
    /// it is never a blend of the old and new sequences.
    pub fn start(&mut self, sequence: SlotSequence, now: Millis) {
        self.value = sequence.start_value();
        self.concealed = sequence.concealed_at(0);
        self.sequence = Some(sequence);
        self.started_at = now;
    }

    /// Cancels the in-flight sequence, leaving the value where it is.
    pub fn cancel(&mut self) {
        self.sequence = None;
        self.concealed = false;
    }

    /// Advances the slot to `now`.
    ///
    /// Returns whether an observable (value or concealment) changed, and the
    /// timing hint for the next service call. A completed sequence is
    /// dropped and the slot returns to idle.
    pub fn service(&mut self, now: Millis) -> (bool, ServiceTiming) {
        let Some(sequence) = &self.sequence else {
            return (false, ServiceTiming::Idle);
        };
        let elapsed = now.since(self.started_at);
        let (value, hint) = sequence.evaluate(elapsed);
        let concealed = sequence.concealed_at(elapsed);
        let changed = value != self.value || concealed != self.concealed;
        self.value = value;
        self.concealed = concealed;
        match hint {
            None => {
                self.sequence = None;
                (changed, ServiceTiming::Idle)
            }
            Some(0) => (changed, ServiceTiming::Continuous),
            Some(wait) => (changed, ServiceTiming::Delay(wait)),
        }
    }

    /// Current observable value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Overrides the resting value. Only meaningful while idle.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Whether the slot is currently concealed.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Whether a sequence is in flight.
    pub fn is_running(&self) -> bool {
        self.sequence.is_some()
    }

    /// Clears concealment without touching any in-flight sequence. Safety
    /// net for sequences interrupted by suspension.
    pub(crate) fn reveal(&mut self) {
        self.concealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel(from: i32, to: i32, delay_ms: u32, duration_ms: u32) -> SlotSequence {
        SlotSequence::builder()
            .stage(from, to, delay_ms, duration_ms)
            .build()
            .unwrap()
    }

    #[test]
    fn idle_sequencer_reports_idle_and_no_change() {
        let mut slot = SlotSequencer::new(7);
        assert_eq!(slot.service(Millis::new(100)), (false, ServiceTiming::Idle));
        assert_eq!(slot.value(), 7);
        assert!(!slot.is_running());
    }

    #[test]
    fn start_snaps_the_value_to_the_sequence_start() {
        let mut slot = SlotSequencer::new(0);
        slot.start(travel(0, 100, 0, 1_000), Millis::ZERO);
        slot.service(Millis::new(500));
        assert_eq!(slot.value(), 50);

        // Superseding mid-flight: observable is B's start value, never a
        // blend of A and B.
        slot.start(travel(200, 300, 0, 1_000), Millis::new(500));
        assert_eq!(slot.value(), 200);
        let (_, timing) = slot.service(Millis::new(500));
        assert_eq!(timing, ServiceTiming::Continuous);
        assert_eq!(slot.value(), 200);
    }

    #[test]
    fn completion_lands_exactly_on_the_end_value() {
        let mut slot = SlotSequencer::new(0);
        slot.start(travel(0, 100, 250, 1_000), Millis::ZERO);
        let (changed, timing) = slot.service(Millis::new(1_250));
        assert!(changed);
        assert_eq!(timing, ServiceTiming::Idle);
        assert_eq!(slot.value(), 100);
        assert!(!slot.is_running());
    }

    #[test]
    fn delay_phase_holds_and_reports_the_remaining_wait() {
        let mut slot = SlotSequencer::new(40);
        slot.start(travel(40, 0, 300, 100), Millis::ZERO);
        let (changed, timing) = slot.service(Millis::new(120));
        assert!(!changed);
        assert_eq!(timing, ServiceTiming::Delay(180));
        assert_eq!(slot.value(), 40);
    }

    #[test]
    fn concealment_follows_the_sequence_window() {
        let sequence = SlotSequence::builder()
            .stage(0, -50, 100, 200)
            .stage(-50, 0, 0, 200)
            .conceal()
            .build()
            .unwrap();

        let mut slot = SlotSequencer::new(0);
        slot.start(sequence, Millis::ZERO);
        assert!(!slot.is_concealed());

        slot.service(Millis::new(150));
        assert!(slot.is_concealed());

        // Completion reveals the slot again.
        slot.service(Millis::new(500));
        assert!(!slot.is_concealed());
        assert_eq!(slot.value(), 0);
    }

    #[test]
    fn cancel_keeps_the_current_value() {
        let mut slot = SlotSequencer::new(0);
        slot.start(travel(0, 100, 0, 1_000), Millis::ZERO);
        slot.service(Millis::new(300));
        slot.cancel();
        assert_eq!(slot.value(), 30);
        assert!(!slot.is_running());
    }

    #[test]
    fn merge_prefers_motion_then_the_nearer_deadline() {
        use ServiceTiming::*;
        assert_eq!(Continuous.merge(Delay(5)), Continuous);
        assert_eq!(Idle.merge(Continuous), Continuous);
        assert_eq!(Delay(400).merge(Delay(150)), Delay(150));
        assert_eq!(Idle.merge(Delay(150)), Delay(150));
        assert_eq!(Idle.merge(Idle), Idle);
    }
}
